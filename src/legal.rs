//! Fixed legal documents — privacy policy and terms of engagement.

use serde::{Deserialize, Serialize};

/// Which legal document to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalDoc {
    Privacy,
    Terms,
}

impl std::fmt::Display for LegalDoc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Privacy => write!(f, "privacy"),
            Self::Terms => write!(f, "terms"),
        }
    }
}

impl std::str::FromStr for LegalDoc {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "privacy" => Ok(Self::Privacy),
            "terms" => Ok(Self::Terms),
            _ => Err(format!("Unknown legal document: {}", s)),
        }
    }
}

impl LegalDoc {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Privacy => "Privacy Policy",
            Self::Terms => "Terms and Conditions",
        }
    }

    /// Opening line shown above the numbered sections.
    pub fn lede(&self) -> &'static str {
        match self {
            Self::Privacy => {
                "Last Updated: May 2024 — At Ezelle Art LLC, we are committed to protecting \
                 the privacy of our funeral service partners and their clients. This policy \
                 outlines how we handle data."
            }
            Self::Terms => {
                "General Agreement Terms — By using this site or inquiring about our \
                 services, you agree to the following professional terms of engagement \
                 with Ezelle Art LLC."
            }
        }
    }

    /// Numbered sections as (heading, body) pairs.
    pub fn sections(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Privacy => &[
                (
                    "1. Data Collection",
                    "We collect information provided voluntarily through our contact forms, \
                     including names, business emails, and business entities. This is used \
                     solely for the purpose of establishing and managing partnership \
                     agreements.",
                ),
                (
                    "2. Professional Confidentiality",
                    "Information regarding deceased individuals or bereaved families shared \
                     for the purpose of creating memorial art is treated with the highest \
                     level of professional sanctity and confidentiality.",
                ),
                (
                    "3. Third-Party Sharing",
                    "We do not sell or trade your personal or business data to outside \
                     parties. Data is only shared when necessary to fulfill the services \
                     requested (e.g., shipping art).",
                ),
            ],
            Self::Terms => &[
                (
                    "1. Intellectual Property",
                    "All brand assets, including the \"Brush of Light\" name and \
                     methodology, are the sole intellectual property of Ezelle Art LLC. \
                     Unauthorized reproduction is prohibited.",
                ),
                (
                    "2. Professional Conduct",
                    "Partners agree to maintain a standard of excellence and respect when \
                     presenting Brush of Light services to bereaved families, upholding the \
                     reputation of the funeral industry.",
                ),
                (
                    "3. Liability",
                    "Ezelle Art LLC provides artistic services and is not liable for \
                     structural or operational changes within the partner's funeral home \
                     or facility.",
                ),
            ],
        }
    }
}
