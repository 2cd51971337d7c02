/// A language the assistant offers. Selecting it stores `name` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub id: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub flag: &'static str,
    pub region: &'static str,
}

pub const LANGUAGES: &[Language] = &[
    Language {
        id: "xhosa",
        name: "isiXhosa",
        native_name: "isiXhosa",
        flag: "🇿🇦",
        region: "South Africa",
    },
    Language {
        id: "swahili",
        name: "Kiswahili",
        native_name: "Kiswahili",
        flag: "🇰🇪",
        region: "East Africa",
    },
    Language {
        id: "pidgin",
        name: "Nigerian Pidgin",
        native_name: "Naija Pidgin",
        flag: "🇳🇬",
        region: "Nigeria",
    },
    Language {
        id: "portuguese",
        name: "Portuguese",
        native_name: "Português",
        flag: "🇦🇴",
        region: "Angola, Mozambique",
    },
];
