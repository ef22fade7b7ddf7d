//! Landing page component
//!
//! The whole site is this one page, written right-to-left in Urdu:
//! - SEO meta tags
//! - Fixed navigation that turns solid once the visitor scrolls
//! - Hero, problem, solution, customer expectations and trust sections
//! - Footer call-to-action
//! - The lead form and WhatsApp confirmation modals
//!
//! Every call-to-action opens the same lead form, tagged with its section.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::LeadSource;
use crate::ui::common::{Button, ButtonSize, ButtonVariant};
use crate::ui::lead::{LeadFlowContext, LeadFormModal, WhatsAppConfirmModal, use_lead_flow_context};

const HERO_IMAGE: &str = "https://images.localbossmarketing.com/wp-content/uploads/2026/01/Whisk_a57820134e10548ba4640828d58628b5dr.jpeg";
const PROBLEM_IMAGE: &str = "https://images.localbossmarketing.com/wp-content/uploads/2026/01/Whisk_7daf6c8721a7fe28ee5474967c39cfc3dr.png";
const CUSTOMER_IMAGE: &str = "https://images.localbossmarketing.com/wp-content/uploads/2026/01/Whisk_2b27b6d317ff863b1e5491044f663b54dr.jpeg";

/// Landing page with the lead capture flow
#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_lead_flow_context();

    view! {
        <SeoMeta />

        <div class="min-h-screen text-right urdu-text bg-slate-50 overflow-x-hidden" dir="rtl">
            <WhatsAppConfirmModal />
            <LeadFormModal />

            <Nav ctx=ctx />
            <Hero ctx=ctx />
            <ProblemSection />
            <SolutionSection />
            <CustomerSection />
            <TrustMetrics />
            <Footer ctx=ctx />
        </div>
    }
}

/// Page section wrapper with the shared horizontal rhythm
#[component]
fn Section(
    children: Children,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    view! {
        <section class=format!("py-20 px-6 md:px-12 max-w-7xl mx-auto {class}")>
            {children()}
        </section>
    }
}

/// Fixed navigation bar
#[component]
fn Nav(ctx: LeadFlowContext) -> impl IntoView {
    let scrolled = ctx.scrolled;

    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-white shadow-md py-3"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent py-6"
            }
        }>
            <div class="max-w-7xl mx-auto px-6 flex justify-between items-center">
                <Logo dark=Signal::derive(move || scrolled.get()) />
                <button
                    type="button"
                    class=move || {
                        if scrolled.get() {
                            "px-6 py-2 rounded-full font-bold transition-all bg-emerald-600 text-white hover:bg-emerald-700"
                        } else {
                            "px-6 py-2 rounded-full font-bold transition-all bg-white text-slate-900 hover:bg-slate-100"
                        }
                    }
                    on:click=move |_| ctx.open_form(LeadSource::Navbar)
                >
                    "فری مشورہ"
                </button>
            </div>
        </nav>
    }
}

#[component]
fn Logo(dark: Signal<bool>) -> impl IntoView {
    view! {
        <div
            class="text-2xl font-black"
            class:text-slate-900=move || dark.get()
            class:text-white=move || !dark.get()
            dir="ltr"
        >
            "LOCAL"<span class="text-emerald-500">"BOSS"</span>
        </div>
    }
}

#[component]
fn Hero(ctx: LeadFlowContext) -> impl IntoView {
    view! {
        <header class="relative bg-slate-950 text-white pt-40 pb-56 px-6 overflow-hidden">
            <div class="absolute inset-0 z-0 opacity-40">
                <img src=HERO_IMAGE class="w-full h-full object-cover" alt="Hero" />
                <div class="absolute inset-0 bg-slate-950/80"></div>
            </div>
            <div class="max-w-5xl mx-auto text-center relative z-10">
                <div class="inline-block bg-emerald-500/20 border border-emerald-500/30 text-white px-5 py-2 rounded-full text-sm font-bold mb-8 backdrop-blur-sm">
                    "کراچی کے نمبر 1 کار رینٹل مارکیٹنگ ایکسپرٹ"
                </div>
                <h1 class="text-5xl md:text-7xl font-extrabold leading-[1.15] mb-8 drop-shadow-lg">
                    "ویب سائٹ تو ہے مگر "<span class="text-emerald-500">"بکنگ"</span>" نہیں آ رہی؟"
                </h1>
                <p class="text-xl md:text-2xl text-slate-200 mb-12 max-w-4xl mx-auto leading-relaxed drop-shadow">
                    "مہنگی مارکیٹنگ پر پیسے ضائع کرنا بند کریں۔ ہم آپ کے بزنس کو گوگل پر \"رینک\" کرواتے ہیں تاکہ کسٹمرز خود آپ کو ڈھونڈیں اور براہِ راست واٹس ایپ پر رابطہ کریں۔"
                </p>
                <Button
                    size=ButtonSize::Hero
                    on_click=Callback::new(move |_| ctx.open_form(LeadSource::Hero))
                >
                    "فری مشورہ حاصل کریں"
                </Button>
            </div>
        </header>
    }
}

/// Highlighted search phrase
#[component]
fn SeoTerm(text: &'static str) -> impl IntoView {
    view! {
        <span class="inline-block bg-slate-200 text-slate-900 px-4 py-1 rounded-lg font-bold border-b-2 border-emerald-600 shadow-sm mx-1 my-1 text-sm" dir="ltr">
            {format!("\"{text}\"")}
        </span>
    }
}

#[component]
fn ProblemRow(lead: &'static str, term: &'static str, tail: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 bg-slate-50 p-5 rounded-2xl border-r-8 border-red-500 shadow-sm">
            <span class="text-2xl">"❌"</span>
            <span class="font-bold">{lead}<SeoTerm text=term />{tail}</span>
        </div>
    }
}

#[component]
fn ProblemSection() -> impl IntoView {
    view! {
        <Section class="-mt-32 relative z-20">
            <div class="bg-white rounded-[2.5rem] shadow-[0_30px_60px_-15px_rgba(0,0,0,0.1)] p-10 md:p-16 border border-slate-100">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div>
                        <h2 class="text-3xl md:text-4xl font-black text-slate-900 mb-8 leading-tight">
                            "آپ کا بزنس گوگل پر "
                            <span class="text-red-600 underline decoration-4 underline-offset-8">"غائب"</span>
                            " کیوں ہے؟"
                        </h2>
                        <div class="space-y-6">
                            <p class="text-lg text-slate-700 font-medium leading-relaxed">
                                "کراچی میں روزانہ ہزاروں لوگ گوگل پر گاڑیاں ڈھونڈتے ہیں۔ اگر آپ ان کی سرچ کا حصہ نہیں ہیں، تو آپ ہر روز کسٹمر کھو رہے ہیں۔"
                            </p>
                            <div class="space-y-4">
                                <ProblemRow lead="کیا آپ کا نام " term="Car Rental Near Me" tail=" سرچ پر آتا ہے؟" />
                                <ProblemRow lead="کیا آپ " term="Wedding Car Rental" tail=" کے کسٹمرز تک پہنچ پا رہے ہیں؟" />
                                <ProblemRow lead="کیا " term="Airport Pickup" tail=" کے آرڈرز دوسروں کے پاس جا رہے ہیں؟" />
                            </div>
                        </div>
                    </div>
                    <div class="bg-slate-100 rounded-[2.5rem] overflow-hidden shadow-inner border border-slate-200">
                        <img src=PROBLEM_IMAGE alt="SEO problem" class="w-full hover:scale-105 transition-transform duration-700" />
                    </div>
                </div>
            </div>
        </Section>
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, desc: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white p-8 rounded-3xl border border-slate-100 shadow-sm hover:shadow-xl hover:-translate-y-1 transition-all duration-300">
            <div class="text-4xl mb-4">{icon}</div>
            <h3 class="text-xl font-black text-slate-900 mb-3">{title}</h3>
            <p class="text-slate-600 leading-relaxed">{desc}</p>
        </div>
    }
}

#[component]
fn SolutionSection() -> impl IntoView {
    view! {
        <Section>
            <div class="text-center max-w-3xl mx-auto mb-16">
                <h2 class="text-4xl md:text-5xl font-black text-slate-900 mb-8 leading-tight">
                    "اشتہارات پر پیسے ضائع کرنا چھوڑیں، "
                    <span class="text-emerald-600 underline underline-offset-8 decoration-emerald-200">"اثاثہ"</span>
                    " بنائیں"
                </h2>
                <p class="text-xl text-slate-700 font-medium leading-relaxed">
                    "ہم آپ کی ویب سائٹ کو ایک ایسا خودکار بکنگ سسٹم بنا دیتے ہیں جو بغیر اشتہارات کے خرچ کے آپ کے لیے گاہک لاتا ہے۔"
                </p>
            </div>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                <FeatureCard icon="🎯" title="ٹارگٹڈ لوکل SEO" desc="ہم آپ کے بزنس کو ان الفاظ پر رینک کرتے ہیں جو لوگ حقیقت میں سرچ کرتے ہیں۔" />
                <FeatureCard icon="📱" title="واٹس ایپ فرسٹ ڈیزائن" desc="کسٹمر کو ویب سائٹ پر لائیں اور بغیر کسی رکاوٹ کے واٹس ایپ چیٹ پر لے جائیں۔" />
                <FeatureCard icon="🗺️" title="گوگل میپس ڈومینیشن" desc="کراچی کے مخصوص علاقوں جیسے ڈی ایچ اے یا گلشن میں آپ کی پہچان بنائیں۔" />
                <FeatureCard icon="⚡" title="تیز رفتار ویب سائٹ" desc="تیز رفتار ویب سائٹ کا مطلب ہے کسٹمر کا بھروسہ اور بہتر گوگل رینکنگ۔" />
                <FeatureCard icon="🚗" title="سروس پیجز" desc="ایئرپورٹ پک اپ اور شادی کی بکنگ کے لیے مخصوص پیجز جو بکنگ لاتے ہیں۔" />
                <FeatureCard icon="💡" title="فری کنسلٹیشن" desc="ہم آپ کو بتاتے ہیں کہ آپ کے بزنس کے لیے کیا صحیح ہے اور کیا غلط۔" />
            </div>
        </Section>
    }
}

/// What a Karachi car rental customer expects, as question/answer cards
const CUSTOMER_EXPECTATIONS: [(&str, &str); 3] = [
    (
        "فوری جواب",
        "کسٹمر کال سے ڈرتا ہے، وہ واٹس ایپ پر ریٹس پوچھنا چاہتا ہے۔",
    ),
    (
        "تصویروں کا ثبوت",
        "بکنگ سے پہلے کسٹمر واٹس ایپ پر گاڑی کی اصل تصویر دیکھنا چاہتا ہے۔",
    ),
    (
        "آسان رابطہ",
        "بغیر کسی فارم کے، براہِ راست مالک سے بات کرنا اعتماد بڑھاتا ہے۔",
    ),
];

#[component]
fn CustomerSection() -> impl IntoView {
    view! {
        <div class="bg-slate-950 py-32 relative overflow-hidden my-20">
            <div class="max-w-7xl mx-auto px-6 flex flex-col lg:flex-row items-center gap-20 relative z-10">
                <div class="flex-1 text-white text-right">
                    <h2 class="text-4xl md:text-5xl font-black mb-10 leading-tight">
                        "کراچی کا کسٹمر کیا چاہتا ہے؟"
                    </h2>
                    <div class="space-y-6">
                        {CUSTOMER_EXPECTATIONS
                            .iter()
                            .map(|(question, answer)| view! {
                                <div class="p-6 bg-white/5 border border-white/10 rounded-2xl hover:bg-white/10 transition-colors">
                                    <h4 class="text-xl font-bold text-emerald-400 mb-2">{*question}</h4>
                                    <p class="text-slate-300 leading-relaxed">{*answer}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="flex-1">
                    <img src=CUSTOMER_IMAGE alt="Customer" class="rounded-[3rem] shadow-2xl border-4 border-emerald-600/20" />
                </div>
            </div>
        </div>
    }
}

/// Headline numbers as (value, caption)
const TRUST_METRICS: [(&str, &str); 4] = [
    ("100%", "لوکل فوکس"),
    ("24/7", "سپورٹ"),
    ("0/-", "فری آڈٹ"),
    ("Real", "نتائج"),
];

#[component]
fn TrustMetrics() -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-6 py-20">
            <div class="grid grid-cols-2 md:grid-cols-4 gap-8 text-center">
                {TRUST_METRICS
                    .iter()
                    .map(|(value, caption)| view! {
                        <div class="p-6 bg-white rounded-3xl shadow-sm border border-slate-100">
                            <div class="text-5xl font-black text-slate-900 mb-2" dir="ltr">{*value}</div>
                            <div class="text-slate-500 font-bold uppercase tracking-wider text-xs">{*caption}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Footer(ctx: LeadFlowContext) -> impl IntoView {
    view! {
        <footer class="bg-slate-950 text-white pt-32 pb-20">
            <div class="max-w-5xl mx-auto px-6 text-center">
                <h2 class="text-5xl md:text-6xl font-black mb-16 leading-tight">
                    "کیا آپ کا بزنس "
                    <span class="text-emerald-500 underline underline-offset-[16px] decoration-8 decoration-emerald-500/30">"نمبر 1"</span>
                    " بننے کے لیے تیار ہے؟"
                </h2>
                <Button
                    variant=ButtonVariant::Primary
                    size=ButtonSize::Hero
                    class="mb-24"
                    on_click=Callback::new(move |_| ctx.open_form(LeadSource::Footer))
                >
                    "فری آڈٹ کے لیے رابطہ کریں"
                </Button>

                <div class="flex flex-col md:flex-row justify-between items-center gap-8 border-t border-white/10 pt-16 text-slate-500 font-bold">
                    <Logo dark=Signal::derive(|| false) />
                    <p class="text-sm">"© 2024 لوکل باس مارکیٹنگ - کراچی کار رینٹل گروتھ"</p>
                </div>
            </div>
        </footer>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="LocalBoss Marketing - Karachi Car Rental SEO" />

        <Meta name="description" content="کراچی کے کار رینٹل بزنس کے لیے لوکل SEO اور واٹس ایپ بکنگ سسٹم۔ فری بزنس آڈٹ حاصل کریں۔" />
        <Meta name="keywords" content="Car Rental Karachi, Car Rental Near Me, Wedding Car Rental, Airport Pickup, Local SEO Karachi" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="LocalBoss Marketing - Karachi Car Rental SEO" />
        <Meta property="og:description" content="ویب سائٹ تو ہے مگر بکنگ نہیں آ رہی؟ فری بزنس آڈٹ حاصل کریں۔" />
        <Meta property="og:image" content=HERO_IMAGE />
        <Meta property="og:locale" content="ur_PK" />
    }
}
