//! 中文翻译 (zh-CN)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "短信网关控制台",
        confirm: "确认",
        cancel: "取消",
        save: "保存",
        loading: "加载中...",
        error: "错误",
        selected: "已选",
        busy: "处理中",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        switch_panel: "切换面板",
        navigate: "导航",
        open: "打开",
        toggle_row: "勾选",
        select_all: "全选",
        clear: "取消选择",
        edit: "编辑",
        enable: "启用",
        disable: "禁用",
        reboot: "重启",
        delete: "删除",
        policy: "策略",
        refresh: "刷新",
        send: "发送",
        query: "查询",
        rewrite: "改写",
        upload: "上传",
        help: "帮助",
        quit: "退出",
    },

    // ========================================================================
    // 侧边栏
    // ========================================================================
    nav: NavTexts {
        title: "菜单",
        dashboard: "仪表盘",
        ports: "端口管理",
        port_list: "端口列表",
        sim_cards: "SIM 卡",
        gateway: "网关设置",
        gateway_status: "网关状态",
        imei: "IMEI 管理",
        tools: "指令工具",
        ussd: "USSD",
        at_command: "AT 指令",
        system: "系统维护",
        firmware: "固件升级",
        backup: "备份恢复",
        license: "授权管理",
    },

    // ========================================================================
    // 页面
    // ========================================================================
    dashboard: DashboardTexts {
        gateway: "网关",
        total_ports: "端口总数",
        port_summary: "端口状态",
        last_refresh: "上次刷新",
        never: "从未",
    },

    ports: PortsTexts {
        col_id: "端口",
        col_name: "名称",
        col_terminal: "终端",
        col_model: "模块",
        col_imei: "IMEI",
        col_status: "状态",
        no_ports: "没有端口，按 Alt+r 刷新",
        status_online: "在线",
        status_offline: "离线",
        status_disabled: "已禁用",
        status_rebooting: "重启中",
        status_error: "故障",
    },

    sim: SimTexts {
        col_operator: "运营商",
        col_phone: "号码",
        col_balance: "余额",
        col_queried_at: "查询时间",
        not_queried: "未查询",
    },

    imei: ImeiTexts {
        col_original: "原始 IMEI",
        col_current: "当前 IMEI",
        col_modified: "已改写",
        no_records: "没有 IMEI 记录",
    },

    commands: CommandsTexts {
        terminals: "终端",
        responses: "响应",
        last_command: "上次指令",
        col_status: "状态",
        pending: "等待中",
        success: "成功",
        failed: "失败",
        no_responses: "选择终端后按 Enter 输入指令",
    },

    maintenance: MaintenanceTexts {
        firmware: "固件",
        backup: "备份",
        license: "授权",
        size_limit: "大小上限",
        last_file: "上次文件",
        idle: "空闲",
        transferring: "传输中",
        verifying: "校验中",
        completed: "已完成",
        failed: "失败",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        error_title: "错误",
        confirm_title: "确认操作",
        confirm_bulk: "确定对所选端口执行",
        edit_port_title: "编辑端口",
        port_name: "显示名称",
        policy_title: "应用策略",
        policy_name: "策略名称",
        imei_title: "改写 IMEI",
        imei_template: "模板",
        imei_hint: "14 位，数字或 x 通配符，第 15 位自动计算校验位",
        command_title: "发送指令",
        command_input: "指令",
        ussd_hint: "例如 *100#",
        at_hint: "例如 AT+CSQ",
        upload_title: "上传文件",
        upload_path: "文件路径",
        input_required: "请输入内容",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status: StatusTexts {
        loading_ports: "正在加载端口...",
        ports_loaded: "个端口已加载",
        nothing_selected: "未选择任何行",
        action_busy: "上一个操作尚未完成",
        action_running: "正在执行",
        action_done: "操作成功",
        action_partial: "部分失败，失败的行保持选中",
        action_failed: "操作失败",
        command_sending: "指令已下发，等待响应...",
        command_done: "指令执行完成",
        balance_loaded: "余额查询完成",
        imei_updated: "IMEI 改写完成",
        upload_started: "开始上传",
        upload_done: "上传完成",
        port_renamed: "端口名称已更新",
        config_save_failed: "配置保存失败",
        language_changed: "语言已切换",
        theme_changed: "主题已切换",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "帮助",
        global: "全局",
        lists: "列表页面",
        ports: "端口列表",
        lines_global: &[
            ("Tab", "切换侧边栏 / 内容面板"),
            ("Alt+r", "刷新当前页面"),
            ("Alt+l", "切换语言"),
            ("Alt+t", "切换主题"),
            ("?", "帮助"),
            ("q / Alt+q", "退出"),
        ],
        lines_lists: &[
            ("↑↓ / j k", "移动光标"),
            ("Space", "勾选当前行"),
            ("a", "全选 / 全不选"),
            ("Esc", "取消选择"),
            ("Enter", "执行页面操作"),
        ],
        lines_ports: &[
            ("Alt+e", "编辑端口名称"),
            ("Alt+o / Alt+f", "启用 / 禁用"),
            ("Alt+b", "重启"),
            ("Alt+d", "删除"),
            ("Alt+p", "应用策略"),
        ],
    },
};
