use log::debug;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{form_feedback, ContactRequest};
use crate::error::SiteError;

/// Hint to show under the form after a submit. A blocked popup has already
/// been reported to the console by `ContactRequest::send`.
fn submit_feedback(result: Result<(), SiteError>) -> Option<String> {
    let err = result.err()?;
    if !matches!(err, SiteError::PopupBlocked(_)) {
        debug!("Contact form not sent: {}", err);
    }
    Some(form_feedback(&err).to_string())
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// WhatsApp number the conversation is opened with.
    pub recipient: AttrValue,
}

pub enum ContactFormMsg {
    SetName(String),
    SetIdea(String),
    SetReference(bool),
    Submit,
}

pub struct ContactForm {
    request: ContactRequest,
    error: Option<String>,
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            request: ContactRequest::default(),
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::SetName(name) => {
                self.request.name = name;
                self.error.take().is_some()
            }
            ContactFormMsg::SetIdea(idea) => {
                self.request.idea = idea;
                self.error.take().is_some()
            }
            ContactFormMsg::SetReference(has_reference) => {
                self.request.has_reference = has_reference;
                true
            }
            ContactFormMsg::Submit => {
                self.error = submit_feedback(self.request.send(&ctx.props().recipient));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let oninput_name = link.callback(|e: InputEvent| {
            ContactFormMsg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let oninput_idea = link.callback(|e: InputEvent| {
            ContactFormMsg::SetIdea(e.target_unchecked_into::<HtmlTextAreaElement>().value())
        });
        let onchange_file = link.callback(|e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            let has_file = input.files().map(|files| files.length() > 0).unwrap_or(false);
            ContactFormMsg::SetReference(has_file)
        });
        let has_reference = self.request.has_reference;

        html! {
            <form class="contact-form" {onsubmit}>
                <div class="form-field">
                    <label>{"Nome"}</label>
                    <input
                        type="text"
                        required=true
                        placeholder="Seu nome completo"
                        oninput={oninput_name}
                    />
                </div>

                <div class="form-field">
                    <label>{"Sua Ideia"}</label>
                    <textarea
                        rows="2"
                        required=true
                        placeholder="Conte sobre o desenho, local do corpo..."
                        oninput={oninput_idea}
                    />
                </div>

                <div>
                    <input type="file" id="file" class="hidden" onchange={onchange_file} />
                    <label for="file" class={classes!("file-label", has_reference.then(|| "file-selected"))}>
                        {
                            if has_reference {
                                "📷 Imagem selecionada"
                            } else {
                                "🖼 Adicionar referência (opcional)"
                            }
                        }
                    </label>
                </div>

                {
                    if let Some(error) = &self.error {
                        html! { <p class="form-error">{error.clone()}</p> }
                    } else {
                        html! {}
                    }
                }

                <button type="submit" class="contact-submit">
                    {"Iniciar Conversa ➜"}
                </button>
            </form>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_submit_clears_feedback() {
        assert_eq!(submit_feedback(Ok(())), None);
    }

    #[test]
    fn failures_map_to_hints() {
        assert_eq!(
            submit_feedback(Err(SiteError::MissingIdea)).as_deref(),
            Some("Conte um pouco sobre a sua ideia.")
        );
        assert_eq!(
            submit_feedback(Err(SiteError::PopupBlocked("https://wa.me/1".to_string()))).as_deref(),
            Some("Permita pop-ups para abrir o WhatsApp.")
        );
    }
}
