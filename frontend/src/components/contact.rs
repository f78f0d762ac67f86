use yew::prelude::*;

#[function_component(Contact)]
pub fn contact() -> Html {
    let sent = use_state(|| false);

    // Nothing is sent anywhere; the form only acknowledges and clears itself
    let onsubmit = {
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::info!("Contact form submitted, discarding");
            if let Some(form) = e.target_dyn_into::<web_sys::HtmlFormElement>() {
                form.reset();
            }
            sent.set(true);
        })
    };

    html! {
        <section id="contact" class="section">
            <div class="container two-column">
                <div>
                    <h2 class="section-title">{"Let\u{2019}s build something beautiful"}</h2>
                    <p class="section-lead">{"Tell me about your project and timeline. I\u{2019}ll reply within 24 hours."}</p>
                    <div class="contact-details">
                        <div><i class="fas fa-envelope"></i>{" hello@studio.com"}</div>
                        <div><i class="fas fa-phone"></i>{" +1 (555) 123-4567"}</div>
                        <div><i class="fas fa-location-dot"></i>{" Remote / Worldwide"}</div>
                    </div>
                </div>
                <form class="contact-form" {onsubmit}>
                    <label class="field">
                        <span>{"Name"}</span>
                        <input name="name" placeholder="Your name" required=true />
                    </label>
                    <label class="field">
                        <span>{"Email"}</span>
                        <input name="email" type="email" placeholder="you@company.com" required=true />
                    </label>
                    <label class="field">
                        <span>{"Message"}</span>
                        <textarea name="message" rows="4" placeholder="Tell me about your project..." required=true />
                    </label>
                    <button type="submit" class="button primary arrow-link">
                        {"Send"}<i class="fas fa-arrow-right"></i>
                    </button>
                    if *sent {
                        <p class="form-note" role="status">{"Thanks! Your message is on its way."}</p>
                    }
                </form>
            </div>
        </section>
    }
}
