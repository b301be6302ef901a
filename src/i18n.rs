//! Bilingual string tables.
//!
//! Every label the dashboard shows exists once per [`Language`]. There is no
//! runtime translation machinery: a language simply selects one of two
//! static [`Strings`] tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    /// Arabic, laid out right-to-left
    #[default]
    #[serde(rename = "ar")]
    Arabic,
    /// English, laid out left-to-right
    #[serde(rename = "en")]
    English,
}

/// Horizontal reading direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    /// Left-to-right
    Ltr,
    /// Right-to-left
    Rtl,
}

impl Language {
    /// ISO 639-1 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::English => "en",
        }
    }

    /// Reading direction used for alignment and column order.
    #[must_use]
    pub const fn direction(self) -> TextDirection {
        match self {
            Self::Arabic => TextDirection::Rtl,
            Self::English => TextDirection::Ltr,
        }
    }

    /// Returns the other language.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Arabic => Self::English,
            Self::English => Self::Arabic,
        }
    }

    /// String table for this language.
    #[must_use]
    pub fn strings(self) -> &'static Strings {
        match self {
            Self::Arabic => &ARABIC,
            Self::English => &ENGLISH,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "ar" | "arabic" => Ok(Self::Arabic),
            "en" | "english" => Ok(Self::English),
            other => anyhow::bail!("Unknown language '{other}'. Must be 'ar' or 'en'"),
        }
    }
}

/// Literal labels for one language.
#[derive(Debug)]
pub struct Strings {
    /// Product name shown in the header
    pub app_title: &'static str,
    /// Navigation label for the users page
    pub nav_users: &'static str,
    /// Navigation label for the audit log page
    pub nav_audit_logs: &'static str,
    /// Users page heading
    pub users_title: &'static str,
    /// Users page subheading
    pub users_subtitle: &'static str,
    /// Audit log page heading
    pub audit_logs_title: &'static str,
    /// Audit log page subheading
    pub audit_logs_subtitle: &'static str,
    /// Search placeholder on the users page
    pub search_users: &'static str,
    /// Search placeholder on the audit log page
    pub search_logs: &'static str,
    /// Category label for "no role restriction"
    pub all_roles: &'static str,
    /// Category label for "no severity restriction"
    pub all_severities: &'static str,
    /// Theme switch label while the light mode is active
    pub switch_to_dark: &'static str,
    /// Theme switch label while the dark mode is active
    pub switch_to_light: &'static str,
    /// Label of the light mode
    pub light_mode: &'static str,
    /// Label of the dark mode
    pub dark_mode: &'static str,
    /// Column headers of the users table
    pub user_columns: [&'static str; 6],
    /// Column headers of the audit log table
    pub log_columns: [&'static str; 5],
    /// Label for users that never signed in
    pub never: &'static str,
    /// Count label for active users
    pub count_active: &'static str,
    /// Count label for administrators
    pub count_admins: &'static str,
    /// Count label for error events
    pub count_errors: &'static str,
    /// Count label for warning events
    pub count_warnings: &'static str,
    /// Count label for info events
    pub count_info: &'static str,
    /// Footer template, `{shown}` and `{total}` are substituted
    pub showing: &'static str,
    /// Key binding hint in the status bar
    pub key_hints: &'static str,
}

impl Strings {
    /// Formats the "showing N of M" footer.
    #[must_use]
    pub fn showing(&self, shown: usize, total: usize) -> String {
        self.showing
            .replace("{shown}", &shown.to_string())
            .replace("{total}", &total.to_string())
    }
}

static ARABIC: Strings = Strings {
    app_title: "ميش بانل",
    nav_users: "المستخدمون",
    nav_audit_logs: "سجل المراجعة",
    users_title: "إدارة المستخدمين",
    users_subtitle: "إدارة أعضاء الفريق وصلاحياتهم",
    audit_logs_title: "سجل المراجعة",
    audit_logs_subtitle: "تتبع جميع الأنشطة والأحداث في النظام",
    search_users: "بحث عن المستخدمين...",
    search_logs: "بحث في السجلات...",
    all_roles: "جميع الأدوار",
    all_severities: "جميع المستويات",
    switch_to_dark: "التبديل للوضع الداكن",
    switch_to_light: "التبديل للوضع الفاتح",
    light_mode: "الوضع الفاتح",
    dark_mode: "الوضع الداكن",
    user_columns: ["المستخدم", "الدور", "القسم", "الحالة", "آخر نشاط", "تاريخ الانضمام"],
    log_columns: ["الحدث", "المستخدم", "المورد", "الخطورة", "الوقت"],
    never: "أبداً",
    count_active: "نشط",
    count_admins: "المسؤولون",
    count_errors: "أخطاء",
    count_warnings: "تحذيرات",
    count_info: "معلومات",
    showing: "عرض {shown} من {total}",
    key_hints: "/ بحث  f تصفية  t السمة  l اللغة  Tab الصفحة  q خروج",
};

static ENGLISH: Strings = Strings {
    app_title: "MeshPanel",
    nav_users: "Users",
    nav_audit_logs: "Audit Logs",
    users_title: "User Management",
    users_subtitle: "Manage team members and their permissions",
    audit_logs_title: "Audit Logs",
    audit_logs_subtitle: "Track all system activities and events",
    search_users: "Search users...",
    search_logs: "Search logs...",
    all_roles: "All Roles",
    all_severities: "All Severities",
    switch_to_dark: "Switch to dark mode",
    switch_to_light: "Switch to light mode",
    light_mode: "Light mode",
    dark_mode: "Dark mode",
    user_columns: ["User", "Role", "Department", "Status", "Last Active", "Joined"],
    log_columns: ["Action", "User", "Resource", "Severity", "Time"],
    never: "Never",
    count_active: "Active",
    count_admins: "Admins",
    count_errors: "Errors",
    count_warnings: "Warnings",
    count_info: "Info",
    showing: "Showing {shown} of {total}",
    key_hints: "/ search  f filter  t theme  l language  Tab page  q quit",
};
