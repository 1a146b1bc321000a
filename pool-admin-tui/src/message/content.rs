//! 内容面板消息
//!
//! 处理内容面板中的操作，如列表选择、搜索、翻页、增删改查等

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认选择（App Client 页打开查看）
    Confirm,

    // ========== CRUD 操作 ==========
    /// 添加新项目
    Add,
    /// 编辑当前选中项
    Edit,
    /// 查看当前选中项
    View,
    /// 删除当前选中项
    Delete,

    // ========== 搜索与筛选 ==========
    /// 进入搜索输入
    StartSearch,
    /// 搜索框输入字符
    SearchInput(char),
    /// 搜索框删除字符
    SearchBackspace,
    /// 结束搜索输入
    EndSearch,
    /// 切换筛选（用户状态 / 系统分类）
    CycleFilter,

    // ========== 分页 ==========
    NextPage,
    PrevPage,

    // ========== 设置页面专用 ==========
    /// 切换到上一个值（用于设置项）
    TogglePrev,
    /// 切换到下一个值（用于设置项）
    ToggleNext,
}
