use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::core::LeadField;
use crate::core::lead::PHONE_PATTERN;
use crate::ui::common::{BaseModal, Button, ButtonSize, ButtonVariant, FormField, SubmitButton};
use crate::ui::lead::use_lead_flow_context;

/// "Free Business Audit" lead form
#[component]
pub fn LeadFormModal() -> impl IntoView {
    let ctx = use_lead_flow_context();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    let close = Callback::new(move |_| ctx.close_form());

    view! {
        <BaseModal
            is_open=ctx.form_visible()
            on_close=close
            label="Free Business Audit"
        >
            <div class="bg-emerald-700 p-8 text-white text-center">
                <h3 class="text-3xl font-black mb-1">"Free Business Audit"</h3>
                <p class="opacity-90 font-medium urdu-text">"نیچے دی گئی معلومات فراہم کریں"</p>
            </div>
            <div class="p-8 bg-slate-50">
                <form on:submit=on_submit class="space-y-4 text-left" dir="ltr">
                    <FormField
                        label="Full Name (پورا نام)"
                        name="name"
                        required=true
                        placeholder="e.g. Muhammad Ahmed"
                        value=ctx.field(LeadField::Name)
                        on_input=Callback::new(move |v| ctx.edit(LeadField::Name, v))
                        error=ctx.field_error(LeadField::Name)
                    />
                    <FormField
                        label="WhatsApp Number (موبائل نمبر)"
                        name="phone"
                        input_type="tel"
                        required=true
                        pattern=PHONE_PATTERN
                        title="Please enter your 11-digit mobile number (e.g., 03001234567)"
                        placeholder="e.g. 03001234567"
                        hint="اسی نمبر پر آپ کو آڈٹ رپورٹ بھیجی جائے گی"
                        value=ctx.field(LeadField::Phone)
                        on_input=Callback::new(move |v| ctx.edit(LeadField::Phone, v))
                        error=ctx.field_error(LeadField::Phone)
                    />
                    <FormField
                        label="Area in Karachi (علاقہ)"
                        name="area"
                        required=true
                        placeholder="e.g. DHA Phase 6 / Gulshan"
                        value=ctx.field(LeadField::Area)
                        on_input=Callback::new(move |v| ctx.edit(LeadField::Area, v))
                        error=ctx.field_error(LeadField::Area)
                    />

                    <SubmitButton>"Get Free Audit Now"</SubmitButton>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Medium
                        class="w-full"
                        on_click=close
                    >
                        "Close"
                    </Button>
                </form>
            </div>
        </BaseModal>
    }
}
