use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of the block that must be inside the viewport before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Inline style for a reveal block. Hidden blocks sit transparent and 28px
/// low; the transition delay lets callers stagger sequential children.
fn reveal_style(visible: bool, delay: f32) -> String {
    format!(
        "opacity: {}; transform: {}; transition: opacity 0.7s ease {}s, transform 0.7s ease {}s;",
        if visible { "1" } else { "0" },
        if visible { "translateY(0)" } else { "translateY(28px)" },
        delay,
        delay,
    )
}

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    pub children: Children,
    /// Transition start offset in seconds.
    #[prop_or_default]
    pub delay: f32,
    #[prop_or_default]
    pub class: Classes,
}

/// Wraps a content block and reveals it the first time at least 15% of it
/// scrolls into the viewport. One-shot: once visible it stays visible, and
/// the observer disconnects itself. If IntersectionObserver is missing the
/// block simply stays hidden.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let visible = use_state(|| false);
    let node = use_node_ref();

    {
        let visible = visible.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let callback = Closure::wrap(Box::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        let intersecting = entries.iter().any(|entry| {
                            entry
                                .unchecked_into::<IntersectionObserverEntry>()
                                .is_intersecting()
                        });
                        if intersecting {
                            visible.set(true);
                            observer.disconnect();
                        }
                    },
                )
                    as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                let init = IntersectionObserverInit::new();
                init.set_threshold(&JsValue::from(REVEAL_THRESHOLD));

                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &init,
                )
                .unwrap();

                if let Some(element) = node.cast::<Element>() {
                    observer.observe(&element);
                }

                move || {
                    observer.disconnect();
                    drop(callback);
                }
            },
            (),
        );
    }

    html! {
        <div ref={node} class={props.class.clone()} style={reveal_style(*visible, props.delay)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::reveal_style;

    #[test]
    fn hidden_blocks_are_transparent_and_offset() {
        let style = reveal_style(false, 0.0);
        assert!(style.contains("opacity: 0"));
        assert!(style.contains("translateY(28px)"));
    }

    #[test]
    fn visible_blocks_are_opaque_and_in_place() {
        let style = reveal_style(true, 0.0);
        assert!(style.contains("opacity: 1"));
        assert!(style.contains("translateY(0)"));
        assert!(!style.contains("28px"));
    }

    #[test]
    fn delay_offsets_the_transition_start() {
        let style = reveal_style(true, 0.3);
        assert!(style.contains("opacity 0.7s ease 0.3s"));
        assert!(style.contains("transform 0.7s ease 0.3s"));
    }

    #[test]
    fn default_delay_is_zero() {
        let style = reveal_style(false, 0.0);
        assert!(style.contains("opacity 0.7s ease 0s"));
    }
}
