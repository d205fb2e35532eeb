use anatomy::{Region, RegionCatalog};
use layers::{LabelState, create_labels, update_labels};
use scene::{BrainModel, Camera, apply_highlight};

/// Largest model dimension after load-time normalization.
pub const MODEL_MAX_SIZE: f64 = 4.0;

/// Description panel text while nothing is selected.
pub const SELECT_PROMPT: &str = "Select a brain region to learn more.";

/// Session state glueing the catalog, the loaded model, the highlighter and
/// the label engine together.
///
/// Selection events and the per-frame tick are the only two entry points, and
/// both run synchronously on the caller's (single) thread.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerApp {
    catalog: RegionCatalog,
    model: BrainModel,
    labels: Vec<LabelState>,
    selected: Option<Region>,
}

impl ViewerApp {
    /// Starts with no model; highlight requests and ticks are no-ops until
    /// `load_model` runs.
    pub fn new(catalog: RegionCatalog) -> Self {
        Self {
            catalog,
            model: BrainModel::default(),
            labels: Vec::new(),
            selected: None,
        }
    }

    /// Installs a freshly loaded model: normalizes it and (re)creates the
    /// label set. Any previous selection is cleared.
    pub fn load_model(&mut self, mut model: BrainModel) {
        model.fit_to(MODEL_MAX_SIZE);
        self.model = model;
        self.labels = create_labels(&self.catalog);
        self.selected = None;
    }

    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    pub fn model(&self) -> &BrainModel {
        &self.model
    }

    pub fn labels(&self) -> &[LabelState] {
        &self.labels
    }

    pub fn selected(&self) -> Option<Region> {
        self.selected
    }

    /// Selection-control event: recomputes highlighting and the description
    /// panel state.
    ///
    /// Unknown names degrade to "nothing selected" at runtime; in debug
    /// builds they assert, since the selection control is wired from the
    /// same configuration as the catalog and a miss is a typo.
    pub fn select_region(&mut self, selection: Option<&str>) {
        debug_assert!(
            selection.is_none_or(|s| s.is_empty() || Region::from_name(s).is_some()),
            "selection control sent unknown region name {selection:?}"
        );
        self.selected = selection.and_then(Region::from_name);
        apply_highlight(&mut self.model, &self.catalog, selection);
    }

    /// Description panel binding: the selected region's text, or the prompt.
    pub fn description(&self) -> &str {
        match self.selected {
            Some(region) => &self.catalog.get(region).description,
            None => SELECT_PROMPT,
        }
    }

    /// Per-frame tick, after the orbit controls have updated `camera`.
    pub fn tick(&mut self, camera: &Camera) {
        update_labels(&mut self.labels, camera);
    }
}
