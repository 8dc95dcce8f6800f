/// Configuration for the enhancement layer.

/// WhatsApp recipient for composed contact messages (digits only, no `+`).
pub const WHATSAPP_RECIPIENT: &str = "233548787551";

/// Navigation tabs: label and target page.
pub const NAV_TABS: [(&str, &str); 4] = [
    ("Home", "index.html"),
    ("About", "about.html"),
    ("Programs", "programs.html"),
    ("Contact", "contact.html"),
];

/// Page an empty path segment resolves to.
pub const DEFAULT_PAGE: &str = "index.html";

// Mount points the host markup provides. A page that omits one of these
// simply never activates that widget.
pub const NAV_MOUNT_ID: &str = "site-nav";
pub const QUOTES_MOUNT_ID: &str = "daily-quotes";
pub const CONTACT_MOUNT_ID: &str = "contact-form";
pub const MOBILE_MENU_MOUNT_ID: &str = "mobile-menu";

// Timing, in milliseconds.
pub const TAB_NAVIGATE_DELAY_MS: u32 = 250;
pub const QUOTE_FADE_MS: u32 = 300;
pub const QUOTE_ROTATE_MS: u32 = 30_000;
pub const NOTICE_DISMISS_MS: u32 = 5_000;
pub const NOTICE_EXIT_MS: u32 = 300;
