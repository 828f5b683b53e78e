//! Per-session view state for incident list consumers.
//!
//! Each consumer owns its `ViewState` and passes it to whatever renders the
//! list. Only the fields in [`PersistedView`] survive a restart; everything
//! else starts from defaults.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::filter::{FilterConfig, SortConfig};
use crate::types::IncidentWithLocation;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
  #[default]
  Table,
  List,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
  #[default]
  Dark,
  Light,
}

impl ThemeMode {
  pub fn toggled(self) -> Self {
    match self {
      Self::Dark => Self::Light,
      Self::Light => Self::Dark,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
  pub page: usize,
  pub page_size: usize,
  pub total: usize,
}

/// Partial pagination change; `None` fields are left alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationUpdate {
  pub page: Option<usize>,
  pub page_size: Option<usize>,
  pub total: Option<usize>,
}

/// The allow-listed subset of [`ViewState`] that is kept across restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedView {
  pub theme_mode: ThemeMode,
  pub view_mode: ViewMode,
  pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
  pub filters: FilterConfig,
  pub sort: SortConfig,
  pub pagination: Pagination,
  pub view_mode: ViewMode,
  pub selected_ids: Vec<i64>,
  pub sidebar_open: bool,
  pub theme_mode: ThemeMode,
}

impl Default for ViewState {
  fn default() -> Self {
    Self::new(&Config::default())
  }
}

impl ViewState {
  pub fn new(config: &Config) -> Self {
    Self {
      filters: FilterConfig::default(),
      sort: SortConfig::default(),
      pagination: Pagination {
        page: 0,
        page_size: config.page_size,
        total: 0,
      },
      view_mode: ViewMode::default(),
      selected_ids: Vec::new(),
      sidebar_open: true,
      theme_mode: ThemeMode::default(),
    }
  }

  pub fn set_filters(&mut self, filters: FilterConfig) {
    self.filters = filters;
  }

  pub fn reset_filters(&mut self) {
    self.filters = FilterConfig::default();
  }

  pub fn set_sort(&mut self, sort: SortConfig) {
    self.sort = sort;
  }

  pub fn set_pagination(&mut self, update: PaginationUpdate) {
    if let Some(page) = update.page {
      self.pagination.page = page;
    }
    if let Some(page_size) = update.page_size {
      self.pagination.page_size = page_size;
    }
    if let Some(total) = update.total {
      self.pagination.total = total;
    }
  }

  pub fn set_view_mode(&mut self, mode: ViewMode) {
    self.view_mode = mode;
  }

  pub fn toggle_selection(&mut self, id: i64) {
    match self.selected_ids.iter().position(|&s| s == id) {
      Some(idx) => {
        self.selected_ids.remove(idx);
      }
      None => self.selected_ids.push(id),
    }
  }

  pub fn select_all(&mut self, ids: Vec<i64>) {
    self.selected_ids = ids;
  }

  pub fn clear_selection(&mut self) {
    self.selected_ids.clear();
  }

  pub fn toggle_sidebar(&mut self) {
    self.sidebar_open = !self.sidebar_open;
  }

  pub fn toggle_theme(&mut self) {
    self.theme_mode = self.theme_mode.toggled();
  }

  /// Filter, sort and slice `items` for the current page.
  ///
  /// Records the filtered count in `pagination.total`. A page size of zero
  /// disables paging.
  pub fn apply(&mut self, items: &[IncidentWithLocation]) -> Vec<IncidentWithLocation> {
    let mut visible = self.filters.apply(items);
    self.sort.sort(&mut visible);
    self.pagination.total = visible.len();

    let size = self.pagination.page_size;
    if size == 0 {
      return visible;
    }
    visible
      .into_iter()
      .skip(self.pagination.page.saturating_mul(size))
      .take(size)
      .collect()
  }

  /// Persistable fields. The page index is reset so a restart opens page one.
  pub fn snapshot(&self) -> PersistedView {
    PersistedView {
      theme_mode: self.theme_mode,
      view_mode: self.view_mode,
      pagination: Pagination {
        page: 0,
        ..self.pagination
      },
    }
  }

  pub fn restore(&mut self, saved: PersistedView) {
    self.theme_mode = saved.theme_mode;
    self.view_mode = saved.view_mode;
    self.pagination = saved.pagination;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::filter::{SortDirection, SortField};
  use crate::service::IncidentService;
  use crate::types::Priority;

  fn ranked() -> Vec<IncidentWithLocation> {
    IncidentService::with_defaults().all_incidents().unwrap()
  }

  fn ids(items: &[IncidentWithLocation]) -> Vec<i64> {
    items.iter().map(|i| i.id()).collect()
  }

  #[test]
  fn defaults_match_a_fresh_session() {
    let view = ViewState::default();
    assert_eq!(view.theme_mode, ThemeMode::Dark);
    assert_eq!(view.view_mode, ViewMode::Table);
    assert!(view.sidebar_open);
    assert!(view.selected_ids.is_empty());
    assert_eq!(view.pagination.page_size, 10);
  }

  #[test]
  fn theme_toggles_back_and_forth() {
    let mut view = ViewState::default();
    view.toggle_theme();
    assert_eq!(view.theme_mode, ThemeMode::Light);
    view.toggle_theme();
    assert_eq!(view.theme_mode, ThemeMode::Dark);
  }

  #[test]
  fn selection_toggle_select_all_clear() {
    let mut view = ViewState::default();
    view.toggle_selection(1);
    assert_eq!(view.selected_ids, vec![1]);
    view.toggle_selection(1);
    assert!(view.selected_ids.is_empty());
    view.select_all(vec![1, 2, 3]);
    assert_eq!(view.selected_ids, vec![1, 2, 3]);
    view.clear_selection();
    assert!(view.selected_ids.is_empty());
  }

  #[test]
  fn pagination_update_merges() {
    let mut view = ViewState::default();
    view.set_pagination(PaginationUpdate {
      page: Some(2),
      ..PaginationUpdate::default()
    });
    assert_eq!(view.pagination.page, 2);
    assert_eq!(view.pagination.page_size, 10);
  }

  #[test]
  fn apply_filters_sorts_and_pages() {
    let mut view = ViewState::new(&Config {
      page_size: 2,
      ..Config::default()
    });
    assert_eq!(ids(&view.apply(&ranked())), vec![5, 3]);
    assert_eq!(view.pagination.total, 5);

    view.set_pagination(PaginationUpdate {
      page: Some(2),
      ..PaginationUpdate::default()
    });
    assert_eq!(ids(&view.apply(&ranked())), vec![1]);

    view.set_filters(FilterConfig {
      priority: vec![Priority::Low],
      ..FilterConfig::default()
    });
    view.set_sort(SortConfig::new(SortField::Id, SortDirection::Asc));
    view.set_pagination(PaginationUpdate {
      page: Some(0),
      ..PaginationUpdate::default()
    });
    assert_eq!(ids(&view.apply(&ranked())), vec![1, 2]);
    assert_eq!(view.pagination.total, 2);

    view.reset_filters();
    assert!(view.filters.is_empty());
  }

  #[test]
  fn page_past_the_end_is_empty() {
    let mut view = ViewState::default();
    view.set_pagination(PaginationUpdate {
      page: Some(9),
      ..PaginationUpdate::default()
    });
    assert!(view.apply(&ranked()).is_empty());
    assert_eq!(view.pagination.total, 5);
  }

  #[test]
  fn only_allow_listed_fields_survive_restore() {
    let mut view = ViewState::default();
    view.toggle_theme();
    view.set_view_mode(ViewMode::List);
    view.toggle_sidebar();
    view.select_all(vec![4]);
    view.set_pagination(PaginationUpdate {
      page: Some(3),
      page_size: Some(25),
      total: Some(80),
    });

    let json = serde_json::to_string(&view.snapshot()).unwrap();
    let saved: PersistedView = serde_json::from_str(&json).unwrap();

    let mut fresh = ViewState::default();
    fresh.restore(saved);
    assert_eq!(fresh.theme_mode, ThemeMode::Light);
    assert_eq!(fresh.view_mode, ViewMode::List);
    assert_eq!(fresh.pagination.page, 0);
    assert_eq!(fresh.pagination.page_size, 25);
    assert!(fresh.sidebar_open);
    assert!(fresh.selected_ids.is_empty());
  }

  #[test]
  fn snapshot_json_shape() {
    let value = serde_json::to_value(ViewState::default().snapshot()).unwrap();
    assert_eq!(
      value,
      serde_json::json!({
        "themeMode": "dark",
        "viewMode": "table",
        "pagination": {"page": 0, "pageSize": 10, "total": 0}
      })
    );
  }
}
