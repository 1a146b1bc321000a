//! 英文翻译 (en-US)

use super::keys::{
    AddUserTexts, AppClientModalTexts, AppClientsTexts, CommonTexts, ConfirmDeleteTexts,
    CredentialsTexts, HelpTexts, HintTexts, LandingTexts, ModalTexts, NavTexts, SettingsTexts,
    ShellTexts, StatusTexts, SystemsTexts, Translations, UsersTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Pool Admin",
        search: "Search",
        all: "All",
        cancel: "Cancel",
        delete: "Delete",
        close: "Close",
        create: "Create",
        save: "Save",
        no_results: "No matching records",
        showing: "Showing",
        to: "to",
        of: "of",
        page: "Page",
        prev: "Prev",
        next: "Next",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        switch_panel: "Switch panel",
        navigate: "Navigate",
        open: "Open",
        select: "Select",
        search: "Search",
        filter: "Filter",
        page: "Page",
        add: "Add",
        edit: "Edit",
        view: "View",
        delete: "Delete",
        modify: "Modify",
        sidebar: "Sidebar",
        quit: "Quit",
    },

    nav: NavTexts {
        title: "Menu",
        systems: "Systems",
        users: "Users",
        app_clients: "App Clients",
        settings: "Settings",
    },

    shell: ShellTexts {
        pool_menu: "User Pool",
        pool_name: "Pool",
        pool_users: "Users",
        pool_clients: "App clients",
        shortcuts_menu: "Shortcuts",
        profile: "Profile",
        signed_in_as: "Signed in as",
        sign_out: "Sign out",
    },

    landing: LandingTexts {
        title: "Signed out",
        message: "You have been signed out of the console.",
        hint: "Press Enter to sign in again, q to quit",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    systems: SystemsTexts {
        category: "Category",
        search_placeholder: "Search systems...",
        no_cards: "No systems match the current filter",
        settling: "updating...",
    },

    users: UsersTexts {
        columns: ["Username", "Email", "Name", "Status", "Created", "Last sign-in"],
        status_filter: "Status",
        search_placeholder: "Search by username, email or name...",
    },

    app_clients: AppClientsTexts {
        columns: ["Name", "Client ID", "Created", "Last used"],
        search_placeholder: "Search by name or client ID...",
    },

    settings: SettingsTexts {
        theme: "Theme",
        dark: "Dark",
        light: "Light",
        language: "Language",
        breakpoint: "Sidebar breakpoint",
    },

    // ========================================================================
    // 弹窗文本
    // ========================================================================
    modal: ModalTexts {
        add_user: AddUserTexts {
            title: "Add User",
            username: "Username",
            email: "Email",
            phone: "Phone",
            given_name: "Given name",
            family_name: "Family name",
            invite_mode: "Access",
            invite: "Send invitation",
            temp: "Temporary password",
            delivery: "Delivery",
            delivery_email: "Email",
            delivery_sms: "SMS",
            temp_password: "Temporary password",
            require_reset: "Require reset",
            email_verified: "Email verified",
            phone_verified: "Phone verified",
            attributes: "Custom attributes",
            attribute_name: "name",
            attribute_value: "value",
            extra_hint: "Alt+g Generate | Alt+n Add attribute | Alt+x Remove attribute",
        },
        app_client: AppClientModalTexts {
            create_title: "Create App Client",
            edit_title: "Edit App Client",
            view_title: "App Client",
            name: "Client name",
            client_id: "Client ID",
            callbacks: "Callback URLs",
            logouts: "Sign-out URLs",
            scopes: "Scopes",
        },
        credentials: CredentialsTexts {
            title: "Client Created",
            client_id: "Client ID",
            client_secret: "Client secret",
            warning: "Copy the secret now. It will not be shown again.",
        },
        confirm_delete: ConfirmDeleteTexts {
            title: "Confirm Deletion",
            message: "Delete this app client?",
        },
        help: HelpTexts {
            title: "Help",
            rows: &[
                ("Tab", "Switch panel"),
                ("↑↓/jk", "Move up/down"),
                ("Enter", "Open / confirm"),
                ("/", "Search"),
                ("f", "Cycle filter"),
                ("PgUp/PgDn", "Previous / next page"),
                ("Alt+a/e/v/d", "Add / edit / view / delete"),
                ("Alt+b", "Toggle sidebar"),
                ("Alt+o/k", "Pool / shortcuts menu"),
                ("Alt+u", "Profile menu"),
                ("Alt+h", "Help"),
                ("Esc", "Close / back"),
                ("Alt+q", "Quit"),
            ],
        },
        error_title: "Error",
        form_hint: "Tab Next | Space Toggle | Enter Submit | Esc Cancel",
    },

    status: StatusTexts {
        user_created: "User created:",
        client_created: "App client created:",
        client_saved: "App client saved:",
        client_deleted: "App client deleted:",
        filter_dropped: "Still updating, filter will re-apply",
        signed_out: "Signed out",
        nothing_selected: "Nothing selected",
        not_supported: "Not available on this page",
        config_failed: "Failed to save settings",
    },
};
