// SPDX-License-Identifier: PMPL-1.0-or-later

//! The compiled Driplo message catalog.
//!
//! Compiled from the per-locale message resources (`en` is the authoring
//! locale, `bg` the translation). Add or change strings in the resources
//! and recompile; `driplo-messages check <RESOURCE_DIR>` flags drift
//! between this module and the resource files.
//!
//! Each row in [`compiled_messages!`] emits a [`MessageEntry`] table row
//! plus a thin accessor function delegating to [`MessageRuntime::resolve`].
//! The accessor surface is uniform:
//!
//! ```
//! use driplo_messages::inputs::MessageInputs;
//! use driplo_messages::messages::{self, CATALOG};
//! use driplo_messages::runtime::{MessageOptions, MessageRuntime, RuntimeFlags};
//!
//! let rt = MessageRuntime::new(&CATALOG, RuntimeFlags::server());
//! assert_eq!(messages::hello(&rt, &MessageInputs::new(), &MessageOptions::default()), "Hello");
//! ```
//!
//! A few accessors are exported under a name that differs from the internal
//! resource identifier (`export("identifier")` rows); the identifier is what
//! tracking and the bridge registry key on, the export is the public name.

use crate::catalog::{Catalog, MessageEntry};
use crate::inputs::MessageInputs;
use crate::locale::Locale;
use crate::runtime::{MessageOptions, MessageRuntime};

macro_rules! message_id {
    ($export:ident) => {
        stringify!($export)
    };
    ($export:ident, $id:literal) => {
        $id
    };
}

macro_rules! compiled_messages {
    (
        $(
            $(#[$meta:meta])*
            $export:ident $(($id:literal))? => { en: $en:expr, bg: $bg:expr }
        ),+ $(,)?
    ) => {
        /// Every compiled entry, in resource declaration order.
        pub const ENTRIES: &[MessageEntry] = &[
            $(
                MessageEntry {
                    id: message_id!($export $(, $id)?),
                    export: stringify!($export),
                    variants: &[(Locale::En, $en), (Locale::Bg, $bg)],
                },
            )+
        ];

        $(
            $(#[$meta])*
            pub fn $export(
                runtime: &MessageRuntime,
                inputs: &MessageInputs,
                options: &MessageOptions,
            ) -> String {
                runtime.resolve(message_id!($export $(, $id)?), inputs, options)
            }
        )+
    };
}

/// The compiled catalog the accessors resolve against.
pub static CATALOG: Catalog = Catalog {
    name: "driplo",
    primary: Locale::En,
    fallback: Locale::Bg,
    locales: &[Locale::En, Locale::Bg],
    entries: ENTRIES,
};

// Language-invariant strings: both locales share one template value.
const INSTAGRAM: &str = "Instagram";
const TIKTOK: &str = "TikTok";
const URL_LABEL: &str = "URL";
const BANNER_BRAND: &str = "DRIPLO";

compiled_messages! {
    // ─── Basics ─────────────────────────────────────────────────────
    /// Landing-page greeting.
    hello => { en: "Hello", bg: "Здравей" },
    welcome => { en: "Welcome to Driplo", bg: "Добре дошли в Driplo" },
    loading => { en: "Loading...", bg: "Зареждане..." },
    price => { en: "Price", bg: "Цена" },
    test => { en: "English works!", bg: "Българският работи!" },

    // ─── Navigation ─────────────────────────────────────────────────
    nav_home => { en: "Home", bg: "Начало" },
    nav_search => { en: "Search", bg: "Търсене" },
    nav_sell => { en: "Sell", bg: "Продай" },
    nav_messages => { en: "Messages", bg: "Съобщения" },
    nav_profile => { en: "Profile", bg: "Профил" },
    nav_favorites => { en: "Favorites", bg: "Любими" },
    nav_orders => { en: "Orders", bg: "Поръчки" },
    nav_settings => { en: "Settings", bg: "Настройки" },
    nav_logout => { en: "Logout", bg: "Изход" },
    nav_login => { en: "Login", bg: "Вход" },
    nav_signup => { en: "Sign up", bg: "Регистрация" },
    nav_start_selling("nav_startSelling") => { en: "Start Selling", bg: "Започни да продаваш" },
    nav_browse_categories("nav_browseCategories") => { en: "Browse Categories", bg: "Разгледай категориите" },

    // ─── Common actions ─────────────────────────────────────────────
    common_cancel => { en: "Cancel", bg: "Отказ" },
    common_save => { en: "Save", bg: "Запази" },
    common_delete => { en: "Delete", bg: "Изтрий" },
    common_edit => { en: "Edit", bg: "Редактирай" },
    common_close => { en: "Close", bg: "Затвори" },
    common_confirm => { en: "Confirm", bg: "Потвърди" },
    common_yes => { en: "Yes", bg: "Да" },
    common_no => { en: "No", bg: "Не" },
    // The bg text is Cyrillic О/К, not the same string as the en text.
    common_ok => { en: "OK", bg: "ОК" },
    common_back => { en: "Back", bg: "Назад" },
    common_next => { en: "Next", bg: "Напред" },
    common_previous => { en: "Previous", bg: "Предишен" },
    common_submit => { en: "Submit", bg: "Изпрати" },
    common_currency => { en: "$", bg: "лв" },

    // ─── Auth ───────────────────────────────────────────────────────
    auth_sign_in("auth_signIn") => { en: "Sign In", bg: "Вход" },
    auth_sign_up("auth_signUp") => { en: "Sign Up", bg: "Регистрация" },
    auth_sign_out("auth_signOut") => { en: "Sign Out", bg: "Изход" },
    auth_email => { en: "Email", bg: "Имейл" },
    auth_password => { en: "Password", bg: "Парола" },
    auth_username => { en: "Username", bg: "Потребителско име" },
    auth_forgot_password("auth_forgotPassword") => { en: "Forgot password?", bg: "Забравена парола?" },
    auth_create_account("auth_createAccount") => { en: "Create account", bg: "Създай акаунт" },
    auth_terms_of_service("auth_termsOfService") => { en: "Terms of Service", bg: "Условия за ползване" },
    auth_privacy_policy("auth_privacyPolicy") => { en: "Privacy Policy", bg: "Политика за поверителност" },

    // ─── Errors ─────────────────────────────────────────────────────
    error_generic => { en: "Something went wrong", bg: "Нещо се обърка" },
    error_network => { en: "Network error. Please try again.", bg: "Мрежова грешка. Опитайте отново." },
    error_validation => { en: "Please check your input", bg: "Моля проверете въведената информация" },
    error_unauthorized => { en: "Unauthorized access", bg: "Неоторизиран достъп" },
    error_not_found("error_notFound") => { en: "Page not found", bg: "Страницата не е намерена" },
    error_try_again("error_tryAgain") => { en: "Try again", bg: "Опитай отново" },

    // ─── Search ─────────────────────────────────────────────────────
    search_placeholder => { en: "Search for items, brands...", bg: "Търсете артикули, марки..." },
    search_filter => { en: "Filter", bg: "Филтър" },
    search_sort => { en: "Sort", bg: "Сортиране" },
    search_results => { en: "Results", bg: "Резултати" },
    search_all => { en: "All", bg: "Всички" },
    search_categories => { en: "Categories", bg: "Категории" },
    search_no_results("search_noResults") => { en: "No results found", bg: "Няма намерени резултати" },
    search_clear_all("search_clearAll") => { en: "Clear All", bg: "Изчисти всички" },
    search_apply_filters("search_applyFilters") => { en: "Apply Filters", bg: "Приложи филтри" },
    search_price_low_to_high("search_priceLowToHigh") => { en: "Price: Low to High", bg: "Цена ↑" },
    search_price_high_to_low("search_priceHighToLow") => { en: "Price: High to Low", bg: "Цена ↓" },

    // ─── Trending ───────────────────────────────────────────────────
    trending_title => { en: "Trending Now", bg: "Актуално сега" },
    trending_promoted => { en: "Promoted", bg: "Промотирани" },
    trending_featured => { en: "Featured Products", bg: "Препоръчани продукти" },
    trending_top_sellers("trending_topSellers") => { en: "Top Sellers", bg: "Топ продавачи" },
    trending_new_seller("trending_newSeller") => { en: "New Seller", bg: "Нов продавач" },

    // ─── Checkout ───────────────────────────────────────────────────
    checkout_summary => { en: "Order summary", bg: "Обобщение на поръчката" },
    checkout_subtotal => { en: "Subtotal", bg: "Междинна сума" },
    checkout_shipping => { en: "Shipping", bg: "Доставка" },
    checkout_tax => { en: "Tax", bg: "Данък" },
    checkout_total => { en: "Total", bg: "Общо" },
    checkout_checkout => { en: "Checkout", bg: "Плащане" },
    checkout_pay => { en: "Pay", bg: "Плати" },
    checkout_place_order("checkout_placeOrder") => { en: "Place order", bg: "Поръчай" },
    checkout_order_placed("checkout_orderPlaced") => { en: "Order placed successfully!", bg: "Поръчката е направена успешно!" },
    checkout_payment_method("checkout_paymentMethod") => { en: "Payment method", bg: "Метод на плащане" },
    checkout_shipping_address("checkout_shippingAddress") => { en: "Shipping address", bg: "Адрес за доставка" },
    checkout_service_fee("checkout_serviceFee") => { en: "Service fee", bg: "Такса за услуга" },
    checkout_payment_failed("checkout_paymentFailed") => { en: "Payment failed", bg: "Плащането неуспешно" },
    checkout_continue_shopping("checkout_continueShopping") => { en: "Continue Shopping", bg: "Продължете пазаруването" },

    // ─── Admin ──────────────────────────────────────────────────────
    admin_back => { en: "Back", bg: "Назад" },
    admin_back_to_site("admin_backToSite") => { en: "Back to Site", bg: "Назад към сайта" },
    admin_dashboard => { en: "Dashboard Overview", bg: "Преглед на таблото" },
    admin_total_users("admin_totalUsers") => { en: "Total Users", bg: "Общо потребители" },
    admin_total_orders("admin_totalOrders") => { en: "Total Orders", bg: "Общо поръчки" },
    admin_total_revenue("admin_totalRevenue") => { en: "Total Revenue", bg: "Общи приходи" },
    admin_recent_orders("admin_recentOrders") => { en: "Recent Orders", bg: "Последни поръчки" },

    // ─── Product page ───────────────────────────────────────────────
    /// Star-rating label: takes `count`.
    pdp_stars => { en: "{count} stars", bg: "{count} звезди" },
    /// Exported under the public name; the resource identifier is the
    /// legacy `addfavorite1` key.
    add_favorite("addfavorite1") => { en: "Add to favorites", bg: "Добави в любими" },

    // ─── Dashboard ──────────────────────────────────────────────────
    /// Takes `username`.
    dashboard_welcome_back("dashboard_welcomeBack") => { en: "Welcome back, {username}!", bg: "Добре дошъл, {username}!" },
    dashboard_minutes_ago("dashboard_minutesAgo") => { en: "{minutes}m ago", bg: "преди {minutes} мин" },
    dashboard_hours_ago("dashboard_hoursAgo") => { en: "{hours}h ago", bg: "преди {hours} ч" },
    dashboard_days_ago("dashboard_daysAgo") => { en: "{days}d ago", bg: "преди {days} дн" },

    // ─── Selling ────────────────────────────────────────────────────
    sell_photos => { en: "Photos", bg: "Снимки" },
    sell_photos_count("sell_photosCount") => { en: "{count} photos", bg: "{count} снимки" },
    sell_more_allowed("sell_moreAllowed") => { en: "{count} more allowed", bg: "още {count} позволени" },
    sell_more_photos("sell_morePhotos") => { en: "+{count} more", bg: "+{count} още" },

    // ─── Profile / banner ───────────────────────────────────────────
    profile_instagram => { en: INSTAGRAM, bg: INSTAGRAM },
    profile_tiktok => { en: TIKTOK, bg: TIKTOK },
    profile_url => { en: URL_LABEL, bg: URL_LABEL },
    banner_welcome_to_driplo("banner_welcomeToDriplo") => { en: BANNER_BRAND, bg: BANNER_BRAND },
}
