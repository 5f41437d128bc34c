// Link catalog and contact details for the hub

use serde::{Deserialize, Serialize};

use super::error::LinkhubError;

pub const TITLE: &str = "គន្លឹះចិញ្ចឹមកូន";
pub const WELCOME: &str =
    "សូមស្វាគមន៍ការមកកាន់សហគមន៍ គន្លឹះចិញ្ចឹមកូន (Positive Parenting) របស់យើង!";
pub const CONTACT_TITLE: &str = "ទំនាក់ទំនងមកកាន់យើង";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LinkIcon {
    Globe,
    Facebook,
    Youtube,
    Telegram,
    Tiktok,
    Email,
    Phone,
}

impl LinkIcon {
    /// Glyph drawn next to a label. Plain text so both frontends can use it.
    pub fn glyph(&self) -> &'static str {
        match self {
            LinkIcon::Globe => "🌐",
            LinkIcon::Facebook => "f",
            LinkIcon::Youtube => "▶",
            LinkIcon::Telegram => "✈",
            LinkIcon::Tiktok => "♪",
            LinkIcon::Email => "✉",
            LinkIcon::Phone => "☎",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LinkAction {
    #[default]
    OpenUrl,
    ShowContact,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkItem {
    pub label: String,
    pub url: String,
    pub icon: LinkIcon,
    #[serde(default)]
    pub action: LinkAction,
}

/// Icon-only entry in the row above the link list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialShortcut {
    pub icon: LinkIcon,
    pub url: String,
}

/// A copyable contact value. `display` is shown, `value` is copied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactEntry {
    pub display: String,
    pub value: String,
}

impl ContactEntry {
    fn new(display: &str, value: &str) -> Self {
        Self {
            display: display.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactInfo {
    pub address: String,
    pub phones: Vec<ContactEntry>,
    pub emails: Vec<ContactEntry>,
    #[serde(default)]
    pub hours: Vec<String>,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            address: "ផ្ទះលេខ ៥, ផ្លូវ ២៤២, សង្កាត់ចតុមុខ, ខណ្ឌដូនពេញ, រាជធានីភ្នំពេញ".to_string(),
            phones: vec![
                ContactEntry::new("+855 92 881 545", "+85592881545"),
                ContactEntry::new("+855 23 223 403", "+85523223403"),
            ],
            emails: vec![ContactEntry::new(
                "rpp.cambodia@savethechildren.org",
                "rpp.cambodia@savethechildren.org",
            )],
            hours: vec![
                "ច័ន្ទ - សុក្រ: ៨:០០ព្រឹក - ៥:០០ល្ងាច".to_string(),
                "សៅរ៍ - អាទិត្យ: បិទ".to_string(),
            ],
        }
    }
}

impl ContactInfo {
    /// Everything with a copy button, phones first.
    pub fn copy_entries(&self) -> impl Iterator<Item = &ContactEntry> {
        self.phones.iter().chain(self.emails.iter())
    }
}

pub fn default_links() -> Vec<LinkItem> {
    let link = |label: &str, url: &str, icon| LinkItem {
        label: label.to_string(),
        url: url.to_string(),
        icon,
        action: LinkAction::OpenUrl,
    };

    vec![
        link("គេហទំព័ររបស់យើង", "https://parenting-tips.info/", LinkIcon::Globe),
        link(
            "ទំព័រហ្វេសប៊ុករបស់យើង",
            "https://www.facebook.com/profile.php?id=61562094251488",
            LinkIcon::Facebook,
        ),
        link(
            "ឆានែល Youtube របស់យើង",
            "https://www.youtube.com/channel/UCJBlwUcjxayND5NgtWpjv_g",
            LinkIcon::Youtube,
        ),
        link(
            "ឆានែល Telegram របស់យើង",
            "https://t.me/positive_parenting_tips",
            LinkIcon::Telegram,
        ),
        link(
            "TikTok - របស់យើង",
            "https://www.tiktok.com/@parentingtipscambodia?_t=zs-8vquxid76wo",
            LinkIcon::Tiktok,
        ),
        LinkItem {
            label: CONTACT_TITLE.to_string(),
            url: "#contact".to_string(),
            icon: LinkIcon::Phone,
            action: LinkAction::ShowContact,
        },
    ]
}

pub fn default_shortcuts() -> Vec<SocialShortcut> {
    [
        (LinkIcon::Youtube, "https://www.youtube.com/channel/UCJBlwUcjxayND5NgtWpjv_g"),
        (LinkIcon::Facebook, "https://www.facebook.com/profile.php?id=61562094251488"),
        (LinkIcon::Telegram, "https://t.me/positive_parenting_tips"),
        (LinkIcon::Email, "mailto:rpp.cambodia@savethechildren.org"),
    ]
    .into_iter()
    .map(|(icon, url)| SocialShortcut {
        icon,
        url: url.to_string(),
    })
    .collect()
}

/// Opens `url` in the system browser (or mail client for `mailto:`).
pub fn open_link(url: &str) -> Result<(), LinkhubError> {
    log::info!("opening {}", url);
    open::that(url).map_err(|source| LinkhubError::OpenLink {
        url: url.to_string(),
        source,
    })
}
