use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{contact_mailto, CONTACT_EMAIL, CONTACT_FORM_URL, CONTACT_ICON_SRC};

#[derive(Properties, PartialEq)]
pub struct ContactDialogProps {
    pub on_close: Callback<()>,
}

/// "Get in touch" dialog. The parent decides whether it is mounted at all.
#[function_component(ContactDialog)]
pub fn contact_dialog(props: &ContactDialogProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    html! {
        <div class="modal-root">
            // Backdrop and dialog are siblings, clicks inside the dialog never reach the backdrop
            <div class="modal-overlay" onclick={close.clone()}></div>
            <div class="modal-dialog" role="dialog" aria-modal="true">
                <button class="modal-close" onclick={close} aria-label="Close">{"X"}</button>
                <div class="modal-body">
                    <img src={CONTACT_ICON_SRC} alt="Drop your question" class="modal-icon" />
                    <p class="modal-text">
                        {"Drop your question/query at "}
                        <a href={contact_mailto()} class="modal-mail">{CONTACT_EMAIL}</a>
                    </p>
                    <p class="modal-or">{"OR"}</p>
                    <a
                        href={CONTACT_FORM_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="modal-form-link"
                    >
                        {"Fill the Form"}
                    </a>
                    <p class="modal-footer">{"We will get back to you soon."}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;

    #[test]
    fn dialog_links_point_at_fixed_targets() {
        let html = render::<ContactDialog>(ContactDialogProps { on_close: Callback::noop() });
        assert!(html.contains("href=\"mailto:varnikumar1512@gmail.com\""));
        assert!(html.contains(
            "href=\"https://docs.google.com/forms/d/e/1FAIpQLSfCfDXQaZX3lfioBYiVEWbvqHSxtK_jaStl0uu_AlmQWlTRDA/viewform?usp=dialog\""
        ));
        assert!(html.contains(">varnikumar1512@gmail.com<"));
        assert!(html.contains("rel=\"noopener noreferrer\""));
    }

    #[test]
    fn dialog_has_backdrop_and_close_control() {
        let html = render::<ContactDialog>(ContactDialogProps { on_close: Callback::noop() });
        assert!(html.contains("class=\"modal-overlay\""));
        assert!(html.contains("class=\"modal-close\""));
        assert!(html.contains("We will get back to you soon."));
    }
}
