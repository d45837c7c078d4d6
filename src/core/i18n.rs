//! User-facing site copy in both locales. One function per message so
//! callers cannot mix up keys; Arabic first to match the site default.

use crate::domain::model::{FormKind, Locale};

fn pick(locale: Locale, ar: &'static str, en: &'static str) -> &'static str {
    match locale {
        Locale::Arabic => ar,
        Locale::English => en,
    }
}

pub fn invalid_input_heading(locale: Locale) -> &'static str {
    pick(locale, "خطأ في الإدخال", "Invalid input")
}

pub fn full_name_required(locale: Locale) -> &'static str {
    pick(locale, "الرجاء إدخال الاسم الكامل.", "Please enter your full name.")
}

pub fn name_required(locale: Locale) -> &'static str {
    pick(locale, "الرجاء إدخال الاسم.", "Please enter your name.")
}

pub fn email_invalid(locale: Locale) -> &'static str {
    pick(
        locale,
        "الرجاء إدخال بريد إلكتروني صالح.",
        "Please enter a valid email address.",
    )
}

pub fn phone_invalid(locale: Locale) -> &'static str {
    pick(
        locale,
        "الرجاء إدخال رقم هاتف صالح.",
        "Please enter a valid phone number.",
    )
}

pub fn date_required(locale: Locale) -> &'static str {
    pick(locale, "الرجاء اختيار تاريخ الحجز.", "Please choose a reservation date.")
}

pub fn date_in_past(locale: Locale) -> &'static str {
    pick(
        locale,
        "لا يمكن اختيار تاريخ في الماضي.",
        "Reservation date cannot be in the past.",
    )
}

pub fn service_required(locale: Locale) -> &'static str {
    pick(locale, "الرجاء اختيار نوع الخدمة.", "Please select a service.")
}

pub fn terms_required(locale: Locale) -> &'static str {
    pick(
        locale,
        "يرجى الموافقة على الشروط والأحكام.",
        "Please accept the terms and conditions.",
    )
}

pub fn interest_required(locale: Locale) -> &'static str {
    pick(locale, "اختر اهتمامًا واحدًا على الأقل.", "Select at least one interest.")
}

pub fn submission_received_heading(locale: Locale) -> &'static str {
    pick(locale, "تم الإرسال", "Submission received")
}

pub fn submission_received_body(locale: Locale, form: FormKind) -> &'static str {
    match form {
        FormKind::Reservation => pick(
            locale,
            "تم استلام طلب الحجز بنجاح! سنقوم بالاتصال بك لتأكيد الموعد.",
            "Your reservation request was received. We will contact you to confirm the appointment.",
        ),
        FormKind::Interest => pick(
            locale,
            "شكراً! تم استلام طلبك وسنتواصل معك قريبًا.",
            "Thank you — your request was submitted. We will be in touch soon.",
        ),
    }
}

pub fn submission_failed_heading(locale: Locale) -> &'static str {
    pick(locale, "حدث خطأ", "Submission failed")
}

pub fn submission_failed_body(locale: Locale) -> &'static str {
    pick(
        locale,
        "حصل خطأ أثناء إرسال النموذج. حاول لاحقًا.",
        "An error occurred while sending the form. Please try again later.",
    )
}

pub fn network_error_heading(locale: Locale) -> &'static str {
    pick(locale, "خطأ في الاتصال", "Network error")
}

pub fn network_error_body(locale: Locale) -> &'static str {
    pick(
        locale,
        "تعذر الاتصال بالخادم. تحقق من اتصالك وحاول مرة أخرى.",
        "Unable to reach the server. Check your connection and try again.",
    )
}

pub fn doctor_selected_heading(locale: Locale) -> &'static str {
    pick(locale, "تم اختيار الطبيب", "Doctor Selected")
}

pub fn consultant_selected_heading(locale: Locale) -> &'static str {
    pick(locale, "تم اختيار الاستشاري", "Consultant Selected")
}

pub fn service_selected_heading(locale: Locale) -> &'static str {
    pick(locale, "تم اختيار الخدمة", "Service Selected")
}

pub fn doctor_selected_body(locale: Locale, doctor: &str) -> String {
    match locale {
        Locale::Arabic => format!("تم اختيار {doctor}. يرجى إكمال بيانات الحجز."),
        Locale::English => format!("{doctor} has been selected. Please complete booking details."),
    }
}

pub fn nursing_selected_body(locale: Locale) -> &'static str {
    pick(
        locale,
        "تم اختيار خدمة التمريض المنزلي. يرجى إكمال بيانات الحجز.",
        "Home nursing service has been selected. Please complete booking details.",
    )
}

pub fn specialist_name(locale: Locale) -> &'static str {
    pick(locale, "د. اعتدال ابراهيم", "Dr. E'tedal Ibrahim")
}

pub fn region_covered(locale: Locale) -> &'static str {
    pick(locale, "مغطاة", "Covered")
}

pub fn region_coming_soon(locale: Locale) -> &'static str {
    pick(locale, "سيتم التغطية قريبًا", "Will be covered soon")
}
