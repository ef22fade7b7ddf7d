use leptos::prelude::*;

use crate::ui::common::{BaseModal, Button, ButtonSize, ButtonVariant};
use crate::ui::icon::{Icon, icons};
use crate::ui::lead::use_lead_flow_context;

/// Last step: hand the visitor over to WhatsApp
#[component]
pub fn WhatsAppConfirmModal() -> impl IntoView {
    let ctx = use_lead_flow_context();

    view! {
        <BaseModal
            is_open=ctx.confirm_visible()
            on_close=Callback::new(move |_| ctx.dismiss_confirm())
            max_width="max-w-md"
            z_index="z-[110]"
            backdrop="bg-slate-950/95 backdrop-blur-xl"
            close_on_backdrop=false
            label="WhatsApp confirmation"
        >
            <div class="p-10 text-center border-t-8 border-emerald-500 urdu-text">
                <div class="w-20 h-20 bg-emerald-100 rounded-full flex items-center justify-center mx-auto mb-6">
                    <Icon name=icons::WHATSAPP class="w-10 h-10 text-emerald-600 animate-bounce"/>
                </div>
                <h3 class="text-2xl font-black text-slate-900 mb-4">"آخری قدم باقی ہے!"</h3>
                <p class="text-slate-600 font-medium leading-relaxed mb-8">
                    "آپ کی معلومات محفوظ کر لی گئی ہیں۔ اپنا فری آڈٹ شروع کروانے کے لیے نیچے بٹن دبا کر واٹس ایپ پر میسج بھیجیں۔"
                </p>
                <Button
                    variant=ButtonVariant::WhatsApp
                    class="w-full"
                    on_click=Callback::new(move |_| ctx.confirm_redirect())
                >
                    <span>"واٹس ایپ پر تصدیق کریں"</span>
                </Button>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Medium
                    class="mt-6"
                    on_click=Callback::new(move |_| ctx.dismiss_confirm())
                >
                    "کینسل کریں"
                </Button>
            </div>
        </BaseModal>
    }
}
