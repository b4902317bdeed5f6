//! Marketing copy for the single-page site.

pub const SITE_NAME: &str = "Brush of Light";
pub const COMPANY: &str = "Ezelle Art LLC";
pub const TAGLINE: &str = "Premium Memorial Art for Funeral Homes";

pub const HERO_LEDE: &str = "Partner with us to offer families a deeply meaningful way to \
honor their loved ones through custom-painted memorial portraits.";

pub const BENEFITS_HEADING: &str = "Why Partner With Us?";
pub const BENEFITS_LEDE: &str = "Enhance your service offerings with premium memorial art \
while generating additional revenue for your funeral home.";

/// The six benefit cards: (title, description).
pub const BENEFITS: [(&str, &str); 6] = [
    (
        "20% Commission",
        "Earn a substantial commission on every memorial art piece sold through your \
         funeral home. A new revenue stream with minimal effort.",
    ),
    (
        "Meaningful Service",
        "Offer families a truly unique way to remember their loved ones. These aren't \
         photos\u{2014}they're hand-painted works of art.",
    ),
    (
        "Zero Risk",
        "No upfront costs, no inventory to manage. We handle production, quality \
         control, and shipping. You simply introduce the service.",
    ),
    (
        "Master Artistry",
        "Every piece is hand-painted by professional artists with years of experience \
         in portraiture and memorial art.",
    ),
    (
        "Marketing Support",
        "Receive professional marketing materials, display easels, sample prints, and \
         ongoing support to help you present the service.",
    ),
    (
        "Trusted Partnership",
        "Join a network of funeral homes nationwide who trust Ezelle Art to honor \
         their families with compassion and excellence.",
    ),
];

pub const PROCESS_HEADING: &str = "Simple Process";
pub const PROCESS_LEDE: &str = "From agreement to commission, we make it effortless.";

/// The four process steps: (title, description).
pub const PROCESS_STEPS: [(&str, &str); 4] = [
    (
        "Sign Agreement",
        "Complete our quick digital partnership agreement right here on this page.",
    ),
    (
        "Receive Materials",
        "Get your marketing kit with samples, brochures, and display easel.",
    ),
    (
        "Introduce Service",
        "Present Brush of Light to families during your arrangement conferences.",
    ),
    (
        "Earn Commission",
        "When families order, we create the art and you receive 20% commission.",
    ),
];

pub const CTA_HEADING: &str = "Ready to Partner?";
pub const CTA_LEDE: &str = "Join funeral homes across the country offering this meaningful \
service to families in their time of need.";

pub const FOOTER_BLURB: &str = "Creating meaningful memorial art to honor lives well-lived.";
