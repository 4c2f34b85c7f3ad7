//! 主体区域的页面

pub mod fallback;
pub mod table;
