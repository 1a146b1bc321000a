//! 简体中文翻译 (zh-CN)

use super::keys::{
    AddUserTexts, AppClientModalTexts, AppClientsTexts, CommonTexts, ConfirmDeleteTexts,
    CredentialsTexts, HelpTexts, HintTexts, LandingTexts, ModalTexts, NavTexts, SettingsTexts,
    ShellTexts, StatusTexts, SystemsTexts, Translations, UsersTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "用户池管理",
        search: "搜索",
        all: "全部",
        cancel: "取消",
        delete: "删除",
        close: "关闭",
        create: "创建",
        save: "保存",
        no_results: "没有匹配的记录",
        showing: "显示",
        to: "至",
        of: "/ 共",
        page: "页码",
        prev: "上一页",
        next: "下一页",
    },

    hints: HintTexts {
        switch_panel: "切换面板",
        navigate: "导航",
        open: "打开",
        select: "选择",
        search: "搜索",
        filter: "筛选",
        page: "翻页",
        add: "添加",
        edit: "编辑",
        view: "查看",
        delete: "删除",
        modify: "修改",
        sidebar: "侧边栏",
        quit: "退出",
    },

    nav: NavTexts {
        title: "菜单",
        systems: "系统",
        users: "用户",
        app_clients: "应用客户端",
        settings: "设置",
    },

    shell: ShellTexts {
        pool_menu: "用户池",
        pool_name: "用户池",
        pool_users: "用户数",
        pool_clients: "客户端数",
        shortcuts_menu: "快捷键",
        profile: "个人资料",
        signed_in_as: "当前登录",
        sign_out: "退出登录",
    },

    landing: LandingTexts {
        title: "已退出登录",
        message: "你已退出控制台。",
        hint: "按 Enter 重新登录，按 q 退出",
    },

    systems: SystemsTexts {
        category: "分类",
        search_placeholder: "搜索系统...",
        no_cards: "没有符合条件的系统",
        settling: "更新中...",
    },

    users: UsersTexts {
        columns: ["用户名", "邮箱", "姓名", "状态", "创建时间", "最近登录"],
        status_filter: "状态",
        search_placeholder: "按用户名、邮箱或姓名搜索...",
    },

    app_clients: AppClientsTexts {
        columns: ["名称", "客户端 ID", "创建时间", "最近使用"],
        search_placeholder: "按名称或客户端 ID 搜索...",
    },

    settings: SettingsTexts {
        theme: "主题",
        dark: "深色",
        light: "浅色",
        language: "语言",
        breakpoint: "侧边栏断点",
    },

    modal: ModalTexts {
        add_user: AddUserTexts {
            title: "添加用户",
            username: "用户名",
            email: "邮箱",
            phone: "手机号",
            given_name: "名",
            family_name: "姓",
            invite_mode: "访问方式",
            invite: "发送邀请",
            temp: "临时密码",
            delivery: "发送渠道",
            delivery_email: "邮件",
            delivery_sms: "短信",
            temp_password: "临时密码",
            require_reset: "首次登录需重置",
            email_verified: "邮箱已验证",
            phone_verified: "手机已验证",
            attributes: "自定义属性",
            attribute_name: "名称",
            attribute_value: "值",
            extra_hint: "Alt+g 生成密码 | Alt+n 添加属性 | Alt+x 删除属性",
        },
        app_client: AppClientModalTexts {
            create_title: "创建应用客户端",
            edit_title: "编辑应用客户端",
            view_title: "应用客户端",
            name: "客户端名称",
            client_id: "客户端 ID",
            callbacks: "回调地址",
            logouts: "登出地址",
            scopes: "授权范围",
        },
        credentials: CredentialsTexts {
            title: "客户端已创建",
            client_id: "客户端 ID",
            client_secret: "客户端密钥",
            warning: "请立即复制密钥，关闭后将无法再次查看。",
        },
        confirm_delete: ConfirmDeleteTexts {
            title: "确认删除",
            message: "确定删除这个应用客户端吗？",
        },
        help: HelpTexts {
            title: "帮助",
            rows: &[
                ("Tab", "切换面板"),
                ("↑↓/jk", "上下移动"),
                ("Enter", "打开 / 确认"),
                ("/", "搜索"),
                ("f", "切换筛选"),
                ("PgUp/PgDn", "上一页 / 下一页"),
                ("Alt+a/e/v/d", "添加 / 编辑 / 查看 / 删除"),
                ("Alt+b", "切换侧边栏"),
                ("Alt+o/k", "用户池 / 快捷键菜单"),
                ("Alt+u", "个人菜单"),
                ("Alt+h", "帮助"),
                ("Esc", "关闭 / 返回"),
                ("Alt+q", "退出"),
            ],
        },
        error_title: "错误",
        form_hint: "Tab 下一项 | 空格 切换 | Enter 提交 | Esc 取消",
    },

    status: StatusTexts {
        user_created: "已创建用户：",
        client_created: "已创建客户端：",
        client_saved: "已保存客户端：",
        client_deleted: "已删除客户端：",
        filter_dropped: "正在更新，稍后重新应用筛选",
        signed_out: "已退出登录",
        nothing_selected: "未选中任何项",
        not_supported: "当前页面不支持此操作",
        config_failed: "保存设置失败",
    },
};
