use leptos::prelude::*;
use storefront_commerce::checkout::{AddressField, CustomerDetails};

/// Inputs for every customer detail, bound to `details`.
#[component]
pub fn AddressFields(details: RwSignal<CustomerDetails>, prefix: &'static str) -> impl IntoView {
    AddressField::ALL
        .into_iter()
        .map(|field| {
            let id = format!("{}-{}", prefix, field.name());
            view! {
                <div class="field">
                    <label for=id.clone()>{field.label()}</label>
                    <input
                        id=id
                        name=field.name()
                        type=field.input_type()
                        required=field.required()
                        prop:value=move || details.with(|d| d.field(field).to_string())
                        on:input=move |ev| details.update(|d| d.set_field(field, event_target_value(&ev)))
                    />
                </div>
            }
        })
        .collect::<Vec<_>>()
}
