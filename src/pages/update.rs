use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::components::fade_in::FadeIn;
use crate::sections::{section_at_focus_line, SECTIONS};

const SERIF: &str = "'Playfair Display', Georgia, serif";

const H2_STYLE: &str = "font-family: 'Playfair Display', Georgia, serif; font-size: 32px; font-weight: 400; line-height: 1.25; margin-bottom: 24px;";

const MESSAGING_LEVELS: &[(&str, &str, &str, &str)] = &[
    ("Level 1", "The Headline", "Don't let your battery decide when your night ends.", "#FAFAF9"),
    ("Level 2", "The Mechanism", "Tap. Grab. Charge on the go. Return to any kiosk. From £3.", "rgba(250,250,249,0.75)"),
    ("Level 3", "The Differentiator", "2× faster. Costs less. Your brand on our screen, not ours.", "rgba(250,250,249,0.6)"),
    ("Level 4", "The Mission", "Every charge funds microloans for women entrepreneurs rebuilding after war. The loans recycle. The impact is perpetual.", "#4ADE80"),
];

const JOURNEY_CHAPTERS: &[(&str, &str, &str)] = &[
    ("Chapter 1", "Back 100 Women", "Fund, support, and document 100 women entrepreneurs. The audience follows the counter from 0 to 100. They meet individual women along the way."),
    ("Chapter 2", "Go Deeper", "Help those businesses grow. Connect them to new markets. The first loans get repaid — the compounding begins visibly. The audience watches women they know by name go from starting to thriving."),
    ("Chapter 3", "The Ripple", "A woman's business employs another woman. Her children go to school. Her community has a new income source. The repaid capital funds the next woman. Individual success becomes community transformation."),
];

const POSITIONING_PILLARS: &[(&str, &str, &str)] = &[
    ("Speed as philosophy", "2× Faster", "We'd rather you were back in your moment than watching a battery bar."),
    ("Price as principle", "Costs Less", "Access to power shouldn't feel like a cost. It should feel like nothing."),
    ("Design as respect", "Your Brand, Not Ours", "Our kiosks carry your venue's brand. Your space should look like yours."),
    ("Impact as moat", "Perpetual Impact", "Every charge seeds a loan that recycles forever. No competitor has anything close."),
];

const PITCH_STEPS: &[(&str, &str)] = &[
    ("01", "Open with the moment being lost. Not the product."),
    ("02", "Let them feel it — the nights ending early, the Ubers that never get called, the groups that split."),
    ("03", "Introduce 100percent as the answer. Free for the venue. Revenue share. Better product."),
    ("04", "Product advantages confirm the feeling — faster, cheaper, their brand on our screen."),
    ("05", "Close with the trial. Two weeks. No cost. No commitment."),
    ("06", "The impact chain is the final reveal — the thing that makes them proud, not just profitable."),
];

const EXPANSION_SEQUENCE: &[&str] = &[
    "Nightlife",
    "Events & Festivals",
    "Tourism & Leisure",
    "Healthcare",
    "Transport & Shopping",
];

const COMPLETED_ITEMS: &[&str] = &[
    "Complete brand identity rebuilt — brand system, voice, messaging hierarchy, competitive positioning",
    "Impact chain developed — shifted from solar lights to women's empowerment through microfinance",
    "Compounding model defined — loans recycle, impact is perpetual, structurally different from CSR",
    "Founder video scripts written — 25+ scripts across 5 series: product, moments, impact, founder journey, bigger picture",
    "Content calendar structured — 3 posts/week, golden ratio of 1 impact video per 3–4 product/belief videos",
    "Website direction set — one-page site built, redesign brief created for full Lovable rebuild",
    "Sales philosophy defined — belief-first pitch, trial close, objection reframing, historical parallels",
    "GTM focused on nightlife, targeting venue groups not independents",
];

const LAUNCH_GATES: &[&str] = &[
    "Charge-to-impact number confirmed — how many charges = one woman backed. Real maths. Verified.",
    "Microfinance scheme live and functioning (end of Q1 2026 target with Vanni Hope)",
    "Consent protocols in place — every woman featured has given informed consent",
    "3–5 women's stories filmed and ready to tell on launch day",
    "Visual standard set — determination, agency, warmth. Entrepreneurs, not beneficiaries.",
    "Compounding model verified with real repayment data",
];

const REVIEW_QUESTIONS: &[(&str, &str)] = &[
    ("Does this positioning feel genuinely different?", "When you look at this brand versus what you've seen from competitors in this space — does it stand apart?"),
    ("Does the impact chain land as real differentiation for big groups?", "Or is it a nice-to-have that doesn't move the needle in a venue group decision-maker's mind?"),
    ("The compounding model — is this the thing that makes sophisticated people lean in?", "The perpetual impact, the recycling capital — does this register as structurally different, or does it need to be simpler?"),
    ("How do we get in front of the big groups?", "With this brand, this product, this impact story — what's the fastest path to the decision-makers that matter?"),
    ("What am I not seeing?", "You've built and scaled in hospitality before. What's the blind spot?"),
];

#[derive(Properties, PartialEq)]
struct SectionLabelProps {
    text: String,
}

#[function_component(SectionLabel)]
fn section_label(props: &SectionLabelProps) -> Html {
    html! {
        <div style="display: inline-block; font-size: 11px; font-weight: 600; letter-spacing: 0.14em; text-transform: uppercase; color: #4ADE80; margin-bottom: 20px; padding: 4px 0; border-bottom: 1px solid rgba(74, 222, 128, 0.25);">
            { props.text.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CardProps {
    children: Children,
    #[prop_or_default]
    accent: bool,
    /// Extra declarations appended after the base style, so callers can
    /// override background or border per card.
    #[prop_or_default]
    style: String,
}

#[function_component(Card)]
fn card(props: &CardProps) -> Html {
    let (background, border) = if props.accent {
        ("rgba(74, 222, 128, 0.04)", "rgba(74, 222, 128, 0.15)")
    } else {
        ("rgba(255,255,255,0.025)", "rgba(255,255,255,0.06)")
    };
    let style = format!(
        "background: {}; border: 1px solid {}; border-radius: 12px; padding: 28px 32px; {}",
        background, border, props.style,
    );
    html! {
        <div style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CompareRowProps {
    before: String,
    after: String,
}

#[function_component(CompareRow)]
fn compare_row(props: &CompareRowProps) -> Html {
    html! {
        <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-bottom: 12px;">
            <div style="background: rgba(255,255,255,0.02); border: 1px solid rgba(255,255,255,0.05); border-radius: 8px; padding: 14px 18px; font-size: 14px; color: rgba(250,250,249,0.45); line-height: 1.55;">
                <span style="font-size: 10px; font-weight: 600; letter-spacing: 0.1em; text-transform: uppercase; color: rgba(255,255,255,0.2); display: block; margin-bottom: 6px;">{"Before"}</span>
                { props.before.clone() }
            </div>
            <div style="background: rgba(74, 222, 128, 0.03); border: 1px solid rgba(74, 222, 128, 0.12); border-radius: 8px; padding: 14px 18px; font-size: 14px; color: rgba(250,250,249,0.85); line-height: 1.55;">
                <span style="font-size: 10px; font-weight: 600; letter-spacing: 0.1em; text-transform: uppercase; color: #4ADE80; display: block; margin-bottom: 6px;">{"Now"}</span>
                { props.after.clone() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StatProps {
    number: String,
    label: String,
}

#[function_component(Stat)]
fn stat(props: &StatProps) -> Html {
    html! {
        <div style="text-align: center;">
            <div style={format!("font-size: 36px; font-weight: 300; color: #4ADE80; line-height: 1; margin-bottom: 8px; font-family: {};", SERIF)}>
                { props.number.clone() }
            </div>
            <div style="font-size: 12px; color: rgba(250,250,249,0.45); letter-spacing: 0.04em; line-height: 1.4;">
                { props.label.clone() }
            </div>
        </div>
    }
}

fn nav_link_style(active: bool) -> String {
    format!(
        "font-size: 11px; font-weight: {}; color: {}; text-decoration: none; padding: 4px 0; transition: color 0.3s; letter-spacing: 0.03em;",
        if active { "500" } else { "400" },
        if active { "#4ADE80" } else { "rgba(250,250,249,0.2)" },
    )
}

#[derive(Properties, PartialEq)]
struct SideNavProps {
    active: String,
}

#[function_component(SideNav)]
fn side_nav(props: &SideNavProps) -> Html {
    html! {
        <nav style="position: fixed; left: 32px; top: 50%; transform: translateY(-50%); z-index: 100; display: flex; flex-direction: column; gap: 6px;">
            { for SECTIONS.iter().map(|section| {
                let id = section.id;
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    // Missing anchors are a no-op; active state follows from
                    // the scroll events this triggers, not from the click.
                    let element = web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.get_element_by_id(id));
                    if let Some(element) = element {
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        element.scroll_into_view_with_scroll_into_view_options(&options);
                    }
                });
                html! {
                    <a key={id}
                        href={format!("#{}", id)}
                        onclick={onclick}
                        style={nav_link_style(props.active == id)}>
                        { section.label }
                    </a>
                }
            }) }
        </nav>
    }
}

#[function_component(PageHeader)]
fn page_header() -> Html {
    html! {
        <header style="padding-top: 100px; padding-bottom: 80px; border-bottom: 1px solid rgba(255,255,255,0.04); margin-bottom: 80px;">
            <FadeIn>
                <div style="font-size: 12px; font-weight: 500; letter-spacing: 0.15em; text-transform: uppercase; color: rgba(250,250,249,0.3); margin-bottom: 32px;">
                    {"100percent · Rebrand Update"}
                </div>
            </FadeIn>
            <FadeIn delay={0.15}>
                <h1 style={format!("font-family: {}; font-size: 48px; font-weight: 400; line-height: 1.15; color: #FAFAF9; margin-bottom: 24px; max-width: 600px;", SERIF)}>
                    {"Where we are."}<br />
                    <span style="color: #4ADE80; font-style: italic;">{"Where we're going."}</span>
                </h1>
            </FadeIn>
            <FadeIn delay={0.3}>
                <p style="font-size: 16px; color: rgba(250,250,249,0.5); line-height: 1.7; max-width: 520px;">
                    {"A complete overview of the 100percent rebrand — the strategic shift, the new identity, the impact chain, and the go-to-market direction. Prepared for our conversation on the 27th."}
                </p>
            </FadeIn>
        </header>
    }
}

#[function_component(ShiftSection)]
fn shift_section() -> Html {
    html! {
        <section id="shift" style="margin-bottom: 100px;">
            <FadeIn>
                <SectionLabel text="01 — The Shift" />
                <h2 style={H2_STYLE}>
                    {"We stopped being a charging company."}
                </h2>
                <p style="font-size: 16px; color: rgba(250,250,249,0.65); line-height: 1.75; margin-bottom: 28px;">
                    {"When you last saw our website, it said "}
                    <span style="color: rgba(250,250,249,0.3); font-style: italic;">{"\"Keep Guests Charged & Spending Longer.\""}</span>
                    {" That's what every power bank company says. It sells dwell time and revenue share. It speaks to a venue's spreadsheet, not their gut. It put us in the same box as ChargedUp, Joos, and everyone else."}
                </p>
                <p style="font-size: 16px; color: rgba(250,250,249,0.65); line-height: 1.75; margin-bottom: 36px;">
                    {"We've moved away from this completely. The rebrand is built around one insight: a phone dying in public isn't a tech problem — it's a human one. We don't sell power banks. We protect moments. And we've rebuilt everything — the brand, the messaging, the positioning, the impact story — around that belief."}
                </p>
            </FadeIn>

            <FadeIn delay={0.1}>
                <CompareRow
                    before="Keep Guests Charged & Spending Longer"
                    after="Don't let your battery decide when your night ends."
                />
                <CompareRow
                    before="Power bank rental company with revenue share"
                    after="The company that makes sure no moment gets lost to a dead battery"
                />
                <CompareRow
                    before="Product-first pitch: here's our kiosk, here's your revenue"
                    after="Belief-first pitch: here's the moment being lost, here's what we prevent"
                />
                <CompareRow
                    before="No impact story"
                    after="Every charge backs a woman entrepreneur rebuilding after war"
                />
            </FadeIn>
        </section>
    }
}

#[function_component(IdentitySection)]
fn identity_section() -> Html {
    html! {
        <section id="identity" style="margin-bottom: 100px;">
            <FadeIn>
                <SectionLabel text="02 — Brand Identity" />
                <h2 style={H2_STYLE}>
                    {"What 100percent "}<span style="font-style: italic;">{"feels"}</span>{" like now."}
                </h2>
            </FadeIn>

            <FadeIn delay={0.1}>
                <Card style="margin-bottom: 24px;">
                    <div style="font-size: 12px; font-weight: 600; letter-spacing: 0.1em; text-transform: uppercase; color: #4ADE80; margin-bottom: 16px;">{"Commander's Intent"}</div>
                    <div style={format!("font-family: {}; font-size: 26px; font-weight: 400; font-style: italic; color: #FAFAF9; line-height: 1.35;", SERIF)}>
                        {"\"We never let a moment go dark.\""}
                    </div>
                </Card>
            </FadeIn>

            <FadeIn delay={0.15}>
                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-bottom: 28px;">
                    <Card>
                        <div style="font-size: 12px; font-weight: 600; letter-spacing: 0.08em; text-transform: uppercase; color: rgba(250,250,249,0.4); margin-bottom: 12px;">{"Tagline"}</div>
                        <div style="font-size: 18px; font-weight: 400; color: #FAFAF9;">{"Every Moment. Powered."}</div>
                    </Card>
                    <Card>
                        <div style="font-size: 12px; font-weight: 600; letter-spacing: 0.08em; text-transform: uppercase; color: rgba(250,250,249,0.4); margin-bottom: 12px;">{"Impact Line"}</div>
                        <div style="font-size: 18px; font-weight: 400; color: #FAFAF9;">{"Every charge powers more than a phone."}</div>
                    </Card>
                </div>
            </FadeIn>

            <FadeIn delay={0.2}>
                <p style="font-size: 16px; color: rgba(250,250,249,0.65); line-height: 1.75; margin-bottom: 20px;">
                    {"The personality is the friend who makes sure everyone's having the best night of their lives AND makes sure everyone gets home safe. Reliable but not boring. Energetic but not loud. Warm but with depth."}
                </p>
                <p style="font-size: 16px; color: rgba(250,250,249,0.65); line-height: 1.75; margin-bottom: 28px;">
                    {"Underneath the energy, there's a story. A founder who's already on the ground in war-affected communities, already backing women entrepreneurs, already building something that lasts longer than any single charge. The customer senses it without being lectured."}
                </p>
            </FadeIn>

            <FadeIn delay={0.25}>
                <Card accent={true} style="margin-bottom: 24px;">
                    <div style="font-size: 12px; font-weight: 600; letter-spacing: 0.1em; text-transform: uppercase; color: #4ADE80; margin-bottom: 16px;">{"The Messaging Hierarchy"}</div>
                    <p style="font-size: 14px; color: rgba(250,250,249,0.55); line-height: 1.65; margin-bottom: 16px;">
                        {"Following Steve Jobs: sell the improvement first, then the mechanism, then the mission. The impact chain comes last — not because it's least important, but because it lands hardest when everything before it has already connected."}
                    </p>
                    <div style="display: flex; flex-direction: column; gap: 10px;">
                        { for MESSAGING_LEVELS.iter().enumerate().map(|(i, &(level, title, desc, color))| {
                            let border = if i < MESSAGING_LEVELS.len() - 1 {
                                "border-bottom: 1px solid rgba(255,255,255,0.04);"
                            } else {
                                ""
                            };
                            html! {
                                <div style={format!("display: flex; align-items: baseline; gap: 12px; padding: 8px 0; {}", border)}>
                                    <span style="font-size: 10px; font-weight: 600; letter-spacing: 0.08em; color: rgba(250,250,249,0.25); min-width: 52px; flex-shrink: 0;">{ level }</span>
                                    <span style={format!("font-size: 13px; font-weight: 500; color: {}; min-width: 120px; flex-shrink: 0;", color)}>{ title }</span>
                                    <span style="font-size: 13px; color: rgba(250,250,249,0.5); line-height: 1.5;">{ desc }</span>
                                </div>
                            }
                        }) }
                    </div>
                </Card>
            </FadeIn>
        </section>
    }
}

#[function_component(ImpactSection)]
fn impact_section() -> Html {
    html! {
        <section id="impact" style="margin-bottom: 100px;">
            <FadeIn>
                <SectionLabel text="03 — The Impact Chain" />
                <h2 style={H2_STYLE}>
                    {"Not charity. Infrastructure."}
                </h2>
                <p style="font-size: 16px; color: rgba(250,250,249,0.65); line-height: 1.75; margin-bottom: 28px;">
                    {"The original impact chain was solar lights for children studying after dark. Simple, emotional — but it was closer to delivering an object than backing a person. We've shifted to something fundamentally stronger: funding women entrepreneurs in war-affected communities through a digital microfinance scheme."}
                </p>
            </FadeIn>

            <FadeIn delay={0.1}>
                <Card accent={true} style="margin-bottom: 24px;">
                    <div style={format!("font-family: {}; font-size: 22px; font-style: italic; color: #FAFAF9; line-height: 1.4; margin-bottom: 20px;", SERIF)}>
                        {"\"Every charge helps a woman in a war-affected community build a business.\""}
                    </div>
                    <p style="font-size: 14px; color: rgba(250,250,249,0.55); line-height: 1.65;">
                        {"\"Build a business\" signals empowerment, not charity. \"War-affected\" carries the gravity without needing explanation. The audience understands: this isn't a handout. This is someone being backed."}
                    </p>
                </Card>
            </FadeIn>

            <FadeIn delay={0.15}>
                <h3 style="font-size: 18px; font-weight: 500; margin-bottom: 16px;">{"The Compounding Model"}</h3>
                <p style="font-size: 16px; color: rgba(250,250,249,0.65); line-height: 1.75; margin-bottom: 20px;">
                    {"This is the structural advantage that separates 100percent from every other purpose-driven brand. The loans get repaid. The capital recycles with interest. New women access it. A charge on a kiosk in 2026 is still funding women in 2030, 2035, and beyond — without another penny going in."}
                </p>
                <p style="font-size: 16px; color: rgba(250,250,249,0.65); line-height: 1.75; margin-bottom: 28px;">
                    {"Even if 100percent disappeared tomorrow, the capital already in the system keeps cycling. The women keep building. That's not charity. That's infrastructure. And it's the thing that makes sophisticated decision-makers lean in — because they recognise it's structurally different from CSR."}
                </p>
            </FadeIn>

            <FadeIn delay={0.2}>
                <Card style="margin-bottom: 24px; background: rgba(74, 222, 128, 0.02); border: 1px solid rgba(74, 222, 128, 0.08);">
                    <div style="font-size: 12px; font-weight: 600; letter-spacing: 0.1em; text-transform: uppercase; color: #4ADE80; margin-bottom: 20px;">{"The Parallel"}</div>
                    <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 20px;">
                        <div>
                            <p style="font-size: 14px; color: rgba(250,250,249,0.5); line-height: 1.65; margin-bottom: 12px;">
                                {"In a London bar, your phone dies. Your night stalls. You tap our kiosk. Your moment continues."}
                            </p>
                        </div>
                        <div>
                            <p style="font-size: 14px; color: rgba(250,250,249,0.5); line-height: 1.65; margin-bottom: 12px;">
                                {"In the Eastern Province of Sri Lanka, a woman who lost everything to war is building a business from nothing. Every charge on our kiosks is part of what's backing her."}
                            </p>
                        </div>
                    </div>
                    <div style={format!("margin-top: 20px; padding-top: 16px; border-top: 1px solid rgba(74, 222, 128, 0.1); font-family: {}; font-size: 18px; font-style: italic; color: #4ADE80; text-align: center; line-height: 1.45;", SERIF)}>
                        {"You keep your night going. She keeps her future going."}<br />
                        {"Same charge. And that charge keeps working long after both of you have moved on."}
                    </div>
                </Card>
            </FadeIn>

            <FadeIn delay={0.25}>
                <h3 style="font-size: 18px; font-weight: 500; margin-bottom: 16px;">{"What's Already Real"}</h3>
                <div style="display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 16px; margin-bottom: 20px;">
                    <Card>
                        <Stat number="120+" label="Women in the microfinance scheme" />
                    </Card>
                    <Card>
                        <Stat number="£125" label="Starts a business on fair terms" />
                    </Card>
                    <Card>
                        <Stat number="Q1 2026" label="Scheme goes live" />
                    </Card>
                </div>
                <p style="font-size: 14px; color: rgba(250,250,249,0.45); line-height: 1.65;">
                    {"Partnership with Vanni Hope, through the Aram Initiative. Digital microfinance for women-owned businesses in Sri Lanka's Eastern Province — agriculture, value-add, food production. The infrastructure to deliver on this impact chain is not hypothetical. It's in motion."}
                </p>
            </FadeIn>

            <FadeIn delay={0.3}>
                <Card style="margin-top: 24px;">
                    <div style="font-size: 12px; font-weight: 600; letter-spacing: 0.1em; text-transform: uppercase; color: rgba(250,250,249,0.4); margin-bottom: 16px;">{"The Journey"}</div>
                    <div style="display: flex; flex-direction: column; gap: 16px;">
                        { for JOURNEY_CHAPTERS.iter().enumerate().map(|(i, &(chapter, title, desc))| {
                            let border = if i < JOURNEY_CHAPTERS.len() - 1 {
                                "border-bottom: 1px solid rgba(255,255,255,0.04);"
                            } else {
                                ""
                            };
                            html! {
                                <div style={format!("display: flex; gap: 16px; padding: 12px 0; {}", border)}>
                                    <div style="font-size: 10px; font-weight: 600; letter-spacing: 0.08em; color: #4ADE80; min-width: 68px; flex-shrink: 0; padding-top: 3px;">{ chapter }</div>
                                    <div>
                                        <div style="font-size: 15px; font-weight: 500; color: #FAFAF9; margin-bottom: 4px;">{ title }</div>
                                        <div style="font-size: 13px; color: rgba(250,250,249,0.45); line-height: 1.55;">{ desc }</div>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                </Card>
            </FadeIn>
        </section>
    }
}

#[function_component(PositioningSection)]
fn positioning_section() -> Html {
    html! {
        <section id="positioning" style="margin-bottom: 100px;">
            <FadeIn>
                <SectionLabel text="04 — Competitive Positioning" />
                <h2 style={H2_STYLE}>
                    {"They sell the box. We sell what the box protects."}
                </h2>
                <p style="font-size: 16px; color: rgba(250,250,249,0.65); line-height: 1.75; margin-bottom: 28px;">
                    {"Our competitors — ChargedUp, Joos, Naki, ZAPT — all position as power bank rental companies selling dwell time and revenue share. We position on meaning, not mechanics. They optimised their product for their business model (slower charging = longer rentals = more revenue). We optimised for the human experience. That's why our product is genuinely better AND cheaper."}
                </p>
            </FadeIn>

            <FadeIn delay={0.1}>
                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-bottom: 28px;">
                    { for POSITIONING_PILLARS.iter().enumerate().map(|(i, &(philosophy, title, desc))| {
                        html! {
                            <FadeIn delay={0.1 + i as f32 * 0.05}>
                                <Card>
                                    <div style="font-size: 10px; font-weight: 600; letter-spacing: 0.08em; text-transform: uppercase; color: #4ADE80; margin-bottom: 8px;">{ philosophy }</div>
                                    <div style="font-size: 17px; font-weight: 500; color: #FAFAF9; margin-bottom: 8px;">{ title }</div>
                                    <div style="font-size: 13px; color: rgba(250,250,249,0.45); line-height: 1.55;">{ desc }</div>
                                </Card>
                            </FadeIn>
                        }
                    }) }
                </div>
            </FadeIn>

            <FadeIn delay={0.25}>
                <Card accent={true}>
                    <div style="font-size: 12px; font-weight: 600; letter-spacing: 0.1em; text-transform: uppercase; color: #4ADE80; margin-bottom: 16px;">{"The Venue Pitch — In Order"}</div>
                    <div style="display: flex; flex-direction: column; gap: 12px;">
                        { for PITCH_STEPS.iter().map(|&(step, text)| {
                            html! {
                                <div style="display: flex; gap: 12px; align-items: baseline;">
                                    <span style="font-size: 11px; font-weight: 600; color: rgba(74, 222, 128, 0.5); min-width: 24px;">{ step }</span>
                                    <span style="font-size: 14px; color: rgba(250,250,249,0.6); line-height: 1.55;">{ text }</span>
                                </div>
                            }
                        }) }
                    </div>
                </Card>
            </FadeIn>
        </section>
    }
}

#[function_component(GtmSection)]
fn gtm_section() -> Html {
    html! {
        <section id="gtm" style="margin-bottom: 100px;">
            <FadeIn>
                <SectionLabel text="05 — Go-To-Market" />
                <h2 style={H2_STYLE}>
                    {"Nightlife first. Density before breadth."}
                </h2>
                <p style="font-size: 16px; color: rgba(250,250,249,0.65); line-height: 1.75; margin-bottom: 28px;">
                    {"Per your advice — we're focused on one venue type. Nightlife is where the \"lost moment\" hits hardest emotionally, where competitors are most active (meaning big groups have been pitched and we can dislodge or differentiate), and where the social proof and content engine work best."}
                </p>
            </FadeIn>

            <FadeIn delay={0.1}>
                <Card style="margin-bottom: 24px;">
                    <div style="font-size: 12px; font-weight: 600; letter-spacing: 0.1em; text-transform: uppercase; color: rgba(250,250,249,0.4); margin-bottom: 16px;">{"Target Decision-Maker"}</div>
                    <p style="font-size: 15px; color: rgba(250,250,249,0.7); line-height: 1.65;">
                        {"Head of operations or head of partnerships at a venue group running 20+ sites who has already been pitched by ChargedUp or Joos and thinks they're all the same. We're not selling to independents. We're going straight to the groups — because the concept is validated globally and we need to prove that we are the one they should pick."}
                    </p>
                </Card>
            </FadeIn>

            <FadeIn delay={0.15}>
                <Card style="margin-bottom: 24px;">
                    <div style="font-size: 12px; font-weight: 600; letter-spacing: 0.1em; text-transform: uppercase; color: rgba(250,250,249,0.4); margin-bottom: 16px;">{"The Two Weapons"}</div>
                    <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 16px;">
                        <div>
                            <div style="font-size: 15px; font-weight: 500; color: #FAFAF9; margin-bottom: 6px;">{"Aggressive economics"}</div>
                            <p style="font-size: 13px; color: rgba(250,250,249,0.45); line-height: 1.55;">
                                {"Competitive revenue share that eliminates the switching cost. We lead with this to get in the door. The first big group deal is a loss leader for everything after it."}
                            </p>
                        </div>
                        <div>
                            <div style="font-size: 15px; font-weight: 500; color: #FAFAF9; margin-bottom: 6px;">{"Brand & impact differentiation"}</div>
                            <p style="font-size: 13px; color: rgba(250,250,249,0.45); line-height: 1.55;">
                                {"This is what makes them want to switch fully — and what makes them stay. Venue branding, quarterly impact reports, a partnership that deepens over time. No competitor offers anything close."}
                            </p>
                        </div>
                    </div>
                </Card>
            </FadeIn>

            <FadeIn delay={0.2}>
                <div style="font-size: 12px; font-weight: 600; letter-spacing: 0.1em; text-transform: uppercase; color: rgba(250,250,249,0.4); margin-bottom: 16px;">{"Expansion Sequence"}</div>
                <div style="display: flex; gap: 8px; flex-wrap: wrap; margin-bottom: 24px;">
                    { for EXPANSION_SEQUENCE.iter().enumerate().map(|(i, &label)| {
                        let active = i == 0;
                        let style = format!(
                            "padding: 8px 16px; border-radius: 20px; font-size: 13px; font-weight: 500; background: {}; color: {}; border: 1px solid {};",
                            if active { "rgba(74, 222, 128, 0.12)" } else { "rgba(255,255,255,0.04)" },
                            if active { "#4ADE80" } else { "rgba(250,250,249,0.35)" },
                            if active { "rgba(74, 222, 128, 0.25)" } else { "rgba(255,255,255,0.06)" },
                        );
                        html! {
                            <div style={style}>
                                { if i > 0 {
                                    html! { <span style="margin-right: 6px; opacity: 0.4;">{ format!("{}.", i + 1) }</span> }
                                } else {
                                    html! {}
                                } }
                                { label }
                                { if active {
                                    html! { <span style="margin-left: 8px; font-size: 10px; opacity: 0.6;">{"NOW"}</span> }
                                } else {
                                    html! {}
                                } }
                            </div>
                        }
                    }) }
                </div>
            </FadeIn>
        </section>
    }
}

#[function_component(StatusSection)]
fn status_section() -> Html {
    html! {
        <section id="status" style="margin-bottom: 100px;">
            <FadeIn>
                <SectionLabel text="06 — Where We Are Now" />
                <h2 style={H2_STYLE}>
                    {"What's done. What's next."}
                </h2>
            </FadeIn>

            <FadeIn delay={0.1}>
                <Card style="margin-bottom: 24px;">
                    <div style="font-size: 12px; font-weight: 600; letter-spacing: 0.1em; text-transform: uppercase; color: #4ADE80; margin-bottom: 20px;">{"Completed"}</div>
                    <div style="display: flex; flex-direction: column; gap: 12px;">
                        { for COMPLETED_ITEMS.iter().map(|&item| {
                            html! {
                                <div style="display: flex; gap: 10px; align-items: flex-start;">
                                    <span style="color: #4ADE80; font-size: 14px; margin-top: 2px; flex-shrink: 0;">{"✓"}</span>
                                    <span style="font-size: 14px; color: rgba(250,250,249,0.6); line-height: 1.55;">{ item }</span>
                                </div>
                            }
                        }) }
                    </div>
                </Card>
            </FadeIn>

            <FadeIn delay={0.15}>
                <Card style="margin-bottom: 24px; background: rgba(251, 191, 36, 0.03); border: 1px solid rgba(251, 191, 36, 0.1);">
                    <div style="font-size: 12px; font-weight: 600; letter-spacing: 0.1em; text-transform: uppercase; color: #FBBF24; margin-bottom: 20px;">{"Before Going Public with Impact"}</div>
                    <div style="display: flex; flex-direction: column; gap: 12px;">
                        { for LAUNCH_GATES.iter().map(|&item| {
                            html! {
                                <div style="display: flex; gap: 10px; align-items: flex-start;">
                                    <span style="color: #FBBF24; font-size: 14px; margin-top: 2px; flex-shrink: 0;">{"○"}</span>
                                    <span style="font-size: 14px; color: rgba(250,250,249,0.55); line-height: 1.55;">{ item }</span>
                                </div>
                            }
                        }) }
                    </div>
                </Card>
            </FadeIn>

            <FadeIn delay={0.2}>
                <Card style="margin-bottom: 24px;">
                    <div style="font-size: 12px; font-weight: 600; letter-spacing: 0.1em; text-transform: uppercase; color: rgba(250,250,249,0.4); margin-bottom: 20px;">{"What I'd Like Your Thoughts On"}</div>
                    <div style="display: flex; flex-direction: column; gap: 16px;">
                        { for REVIEW_QUESTIONS.iter().enumerate().map(|(i, &(question, detail))| {
                            let border = if i < REVIEW_QUESTIONS.len() - 1 {
                                "border-bottom: 1px solid rgba(255,255,255,0.04);"
                            } else {
                                ""
                            };
                            html! {
                                <div style={format!("padding: 14px 0; {}", border)}>
                                    <div style="font-size: 15px; font-weight: 500; color: #FAFAF9; margin-bottom: 4px;">{ question }</div>
                                    <div style="font-size: 13px; color: rgba(250,250,249,0.4); line-height: 1.5;">{ detail }</div>
                                </div>
                            }
                        }) }
                    </div>
                </Card>
            </FadeIn>
        </section>
    }
}

#[function_component(ClosingSection)]
fn closing_section() -> Html {
    html! {
        <>
            <section style="margin-bottom: 80px; padding-top: 40px; border-top: 1px solid rgba(255,255,255,0.04);">
                <FadeIn>
                    <div style="text-align: center; padding: 40px 0;">
                        <div style={format!("font-family: {}; font-size: 22px; font-weight: 400; font-style: italic; color: rgba(250,250,249,0.7); line-height: 1.5; max-width: 480px; margin: 0 auto 24px;", SERIF)}>
                            {"The mission was here first."}<br />
                            {"The business was built around it."}<br />
                            {"That order of operations can't be faked."}
                        </div>
                        <div style="font-size: 14px; font-weight: 600; letter-spacing: 0.08em; color: #4ADE80;">
                            {"100percent — Every Moment. Powered."}
                        </div>
                    </div>
                </FadeIn>
            </section>

            <footer style="text-align: center; padding: 32px 0 48px; border-top: 1px solid rgba(255,255,255,0.03);">
                <div style="color: rgba(250,250,249,0.15); font-size: 11px;">
                    {"100percent · Prepared for Nelson Sivalingam · February 2026"}
                </div>
            </footer>
        </>
    }
}

#[function_component(BrandUpdate)]
pub fn brand_update() -> Html {
    let active_section = use_state_eq(|| SECTIONS[0].id.to_string());

    {
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let straddling = section_at_focus_line(|id| {
                        document.get_element_by_id(id).map(|element| {
                            let rect = element.get_bounding_client_rect();
                            (rect.top(), rect.bottom())
                        })
                    });
                    // None (above the first section or past the last one)
                    // keeps the previous id.
                    if let Some(id) = straddling {
                        active_section.set(id.to_string());
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <div style="background: #0C0A09; color: #FAFAF9; font-family: 'DM Sans', -apple-system, BlinkMacSystemFont, sans-serif; min-height: 100vh; position: relative;">
            <link href="https://fonts.googleapis.com/css2?family=DM+Sans:wght@300;400;500;600&family=Playfair+Display:ital,wght@0,400;0,600;1,400&display=swap" rel="stylesheet" />

            // Subtle top gradient
            <div style="position: fixed; top: 0; left: 0; right: 0; height: 300px; background: radial-gradient(ellipse at 50% -20%, rgba(74, 222, 128, 0.04) 0%, transparent 70%); pointer-events: none; z-index: 0;"></div>

            <SideNav active={(*active_section).clone()} />

            <main style="max-width: 720px; margin: 0 auto; padding: 0 24px; position: relative; z-index: 1;">
                <PageHeader />
                <ShiftSection />
                <IdentitySection />
                <ImpactSection />
                <PositioningSection />
                <GtmSection />
                <StatusSection />
                <ClosingSection />
            </main>
        </div>
    }
}
