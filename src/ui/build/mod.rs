//! 构建器：把配置树变成活动控件
//!
//! 三个构建器共享同一套走树规则：
//! 1. 深度优先、前序遍历；
//! 2. `visible=false` 的节点整棵子树跳过（无控件、无注册、无递归）；
//! 3. 每个可见节点恰好创建一个控件；
//! 4. 有名字的控件写入注册表；
//! 5. 摆放提示翻译成 Attach（父节点是分栏容器时走加权路径）；
//! 6. 命令经 CommandTable 解析，解析不到的降级为禁用控件；
//! 7. 以新建控件为父节点递归子节点。

mod layout;
mod menu;
mod toolbar;

pub use layout::LayoutBuilder;
pub use menu::MenuBuilder;
pub use toolbar::ToolbarBuilder;
