//! Partnership agreement templating — terms, signed summary, dates.

use chrono::{DateTime, Utc};

/// Provider entity named throughout the agreement.
pub const PROVIDER: &str = "Ezelle Art LLC";
/// Service brand the agreement covers.
pub const BRAND: &str = "Brush of Light";
/// Partner commission on each completed sale.
pub const COMMISSION_PERCENT: u32 = 20;

/// Opening line of the terms, with the partner's business interpolated.
pub fn preamble(business_name: &str) -> String {
    format!(
        "This agreement is entered into between {PROVIDER} (\"Provider\") and \
         {business_name} (\"Partner\")."
    )
}

/// The five fixed sections of the partnership terms.
pub const TERMS_SECTIONS: [(&str, &str); 5] = [
    (
        "1. Services Provided",
        "Provider agrees to create custom memorial art (\"Brush of Light\" pieces) \
         based on photographs and details supplied by Partner on behalf of bereaved \
         families.",
    ),
    (
        "2. Revenue Sharing",
        "Partner will receive a 20% commission on each completed memorial artwork \
         sale facilitated through their funeral home.",
    ),
    (
        "3. Brand Integrity",
        "Partner agrees to represent the \"Brush of Light\" service with \
         professionalism and compassion, maintaining the reputation standards of \
         both parties.",
    ),
    (
        "4. Confidentiality",
        "All client information and photographs shared for the purpose of creating \
         memorial art will be treated with strict confidentiality and destroyed \
         after completion.",
    ),
    (
        "5. Marketing Materials",
        "Provider will supply Partner with professional marketing materials, sample \
         images, and display easels to present the service to families.",
    ),
];

/// One-paragraph summary shown on the signed document.
pub fn summary(business_name: &str) -> String {
    format!(
        "{business_name} has entered into a partnership agreement with {PROVIDER} to \
         offer \"{BRAND}\" memorial art services. Partner will receive \
         {COMMISSION_PERCENT}% commission on completed sales and agrees to maintain \
         brand integrity and client confidentiality."
    )
}

/// Long-form en-US date, e.g. "May 1, 2024".
pub fn long_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}
