//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 切换选项 / 开关（左）
    PrevOption,

    /// 切换选项 / 开关（右，空格）
    NextOption,

    /// 确认/提交
    Confirm,

    /// 在确认删除弹窗中切换焦点
    ToggleDeleteFocus,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 生成临时密码
    GeneratePassword,

    /// 添加一行自定义属性
    AddRow,

    /// 删除焦点所在的自定义属性行
    RemoveRow,
}
