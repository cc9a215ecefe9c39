//! UI building blocks shared across rendering and state modules.

/// Detail pane for the selected job.
pub mod details;
/// Filter bar and facet picker popup.
pub mod facets;
pub mod logs;
/// Canvas world map and marker list.
pub mod map;
pub mod pager;
/// Search prompt rendering and request status.
pub mod prompt;
/// Scrollbar for viewports.
pub mod scrollbar;
/// Table rendering and configuration.
pub mod tables;

pub use details::{DetailsContext, render_details, wrap_lines};
pub use facets::{PickerView, popup_area, render_filter_bar, render_picker};
pub use logs::LogConsole;
pub use map::{MapContext, render_map, render_marker_list};
pub use pager::{PageHitbox, control_at, render_pager};
pub use prompt::{InputContext, ProgressState, render_input};
pub use scrollbar::{ScrollMetrics, point_in_rect, render_scrollbar};
pub use tables::{TableSpec, render_table, row_at};
