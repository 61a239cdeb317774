//! English translations (en-US)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // Common
    // ========================================================================
    common: CommonTexts {
        app_name: "SMS Gateway Console",
        confirm: "Confirm",
        cancel: "Cancel",
        save: "Save",
        loading: "Loading...",
        error: "Error",
        selected: "selected",
        busy: "Working",
    },

    // ========================================================================
    // Hints
    // ========================================================================
    hints: HintTexts {
        switch_panel: "Switch panel",
        navigate: "Navigate",
        open: "Open",
        toggle_row: "Toggle",
        select_all: "All",
        clear: "Clear",
        edit: "Edit",
        enable: "Enable",
        disable: "Disable",
        reboot: "Reboot",
        delete: "Delete",
        policy: "Policy",
        refresh: "Refresh",
        send: "Send",
        query: "Query",
        rewrite: "Rewrite",
        upload: "Upload",
        help: "Help",
        quit: "Quit",
    },

    // ========================================================================
    // Sidebar
    // ========================================================================
    nav: NavTexts {
        title: "Menu",
        dashboard: "Dashboard",
        ports: "Ports",
        port_list: "Port List",
        sim_cards: "SIM Cards",
        gateway: "Gateway",
        gateway_status: "Status",
        imei: "IMEI",
        tools: "Tools",
        ussd: "USSD",
        at_command: "AT Command",
        system: "System",
        firmware: "Firmware",
        backup: "Backup",
        license: "License",
    },

    // ========================================================================
    // Pages
    // ========================================================================
    dashboard: DashboardTexts {
        gateway: "Gateway",
        total_ports: "Total ports",
        port_summary: "Port status",
        last_refresh: "Last refresh",
        never: "never",
    },

    ports: PortsTexts {
        col_id: "Port",
        col_name: "Name",
        col_terminal: "Terminal",
        col_model: "Model",
        col_imei: "IMEI",
        col_status: "Status",
        no_ports: "No ports. Press Alt+r to refresh",
        status_online: "Online",
        status_offline: "Offline",
        status_disabled: "Disabled",
        status_rebooting: "Rebooting",
        status_error: "Error",
    },

    sim: SimTexts {
        col_operator: "Operator",
        col_phone: "Number",
        col_balance: "Balance",
        col_queried_at: "Queried",
        not_queried: "not queried",
    },

    imei: ImeiTexts {
        col_original: "Original IMEI",
        col_current: "Current IMEI",
        col_modified: "Modified",
        no_records: "No IMEI records",
    },

    commands: CommandsTexts {
        terminals: "Terminals",
        responses: "Responses",
        last_command: "Last command",
        col_status: "Status",
        pending: "Pending",
        success: "OK",
        failed: "Failed",
        no_responses: "Select terminals and press Enter to send a command",
    },

    maintenance: MaintenanceTexts {
        firmware: "Firmware",
        backup: "Backup",
        license: "License",
        size_limit: "Size limit",
        last_file: "Last file",
        idle: "Idle",
        transferring: "Transferring",
        verifying: "Verifying",
        completed: "Completed",
        failed: "Failed",
    },

    // ========================================================================
    // Modals
    // ========================================================================
    modal: ModalTexts {
        error_title: "Error",
        confirm_title: "Confirm",
        confirm_bulk: "Run on the selected ports:",
        edit_port_title: "Edit Port",
        port_name: "Display name",
        policy_title: "Apply Policy",
        policy_name: "Policy name",
        imei_title: "Rewrite IMEI",
        imei_template: "Template",
        imei_hint: "14 symbols, digits or x wildcards; check digit is appended",
        command_title: "Send Command",
        command_input: "Command",
        ussd_hint: "e.g. *100#",
        at_hint: "e.g. AT+CSQ",
        upload_title: "Upload File",
        upload_path: "File path",
        input_required: "Input required",
    },

    // ========================================================================
    // Status bar
    // ========================================================================
    status: StatusTexts {
        loading_ports: "Loading ports...",
        ports_loaded: "ports loaded",
        nothing_selected: "Nothing selected",
        action_busy: "Previous action still running",
        action_running: "Running",
        action_done: "Action succeeded",
        action_partial: "Partially failed; failed rows stay selected",
        action_failed: "Action failed",
        command_sending: "Command sent, waiting for responses...",
        command_done: "Command finished",
        balance_loaded: "Balances updated",
        imei_updated: "IMEI rewritten",
        upload_started: "Upload started",
        upload_done: "Upload completed",
        port_renamed: "Port renamed",
        config_save_failed: "Failed to save settings",
        language_changed: "Language changed",
        theme_changed: "Theme changed",
    },

    // ========================================================================
    // Help
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        global: "Global",
        lists: "Lists",
        ports: "Port list",
        lines_global: &[
            ("Tab", "Switch sidebar / content"),
            ("Alt+r", "Refresh current page"),
            ("Alt+l", "Switch language"),
            ("Alt+t", "Switch theme"),
            ("?", "Help"),
            ("q / Alt+q", "Quit"),
        ],
        lines_lists: &[
            ("↑↓ / j k", "Move cursor"),
            ("Space", "Toggle row"),
            ("a", "Select all / none"),
            ("Esc", "Clear selection"),
            ("Enter", "Page action"),
        ],
        lines_ports: &[
            ("Alt+e", "Edit port name"),
            ("Alt+o / Alt+f", "Enable / disable"),
            ("Alt+b", "Reboot"),
            ("Alt+d", "Delete"),
            ("Alt+p", "Apply policy"),
        ],
    },
};
