use crate::analysis::pipeline::{self, PipelineOutput};
use crate::analysis::predict::{self, ProductionOutlook};
use crate::color::DistrictColors;
use crate::data::filter::DistrictSelection;
use crate::data::model::{Dataset, FEATURE_COUNT};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The view selected in the sidebar menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Exploration,
    Model,
    Prediction,
    Insight,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Dashboard,
        View::Exploration,
        View::Model,
        View::Prediction,
        View::Insight,
    ];

    pub fn title(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Exploration => "Exploration",
            View::Model => "Model",
            View::Prediction => "Prediction",
            View::Insight => "Insight",
        }
    }
}

/// State of the prediction form: four non-negative inputs and the last
/// computed result. The result is cleared whenever the model changes.
#[derive(Debug, Clone, Default)]
pub struct PredictionForm {
    pub inputs: [f64; FEATURE_COUNT],
    pub result: Option<(f64, ProductionOutlook)>,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until the initial load succeeds).
    pub dataset: Option<Dataset>,

    /// Which view the central panel shows.
    pub view: View,

    /// Current district filter.
    pub selection: DistrictSelection,

    /// Output of the last pipeline run (cached; recomputed on any
    /// dataset or filter change, never incrementally updated).
    pub pipeline: Option<PipelineOutput>,

    /// District → colour map for the charts.
    pub district_colors: Option<DistrictColors>,

    /// Prediction form inputs and result.
    pub prediction: PredictionForm,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            view: View::default(),
            selection: DistrictSelection::All,
            pipeline: None,
            district_colors: None,
            prediction: PredictionForm::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: reset the filter, rebuild the colour
    /// map, and run the pipeline once. This is the only way a dataset
    /// enters the state, keeping the load-once rule explicit.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.selection = DistrictSelection::All;
        self.district_colors = Some(DistrictColors::new(&dataset.districts));
        self.dataset = Some(dataset);
        self.prediction = PredictionForm::default();
        self.status_message = None;
        self.recompute();
    }

    /// Re-run the whole filter → fit → metrics pipeline from scratch.
    /// Any cached prediction belongs to the previous model and is dropped.
    pub fn recompute(&mut self) {
        self.pipeline = self
            .dataset
            .as_ref()
            .map(|ds| pipeline::run(ds, &self.selection));
        self.prediction.result = None;
    }

    /// Change the district filter and recompute.
    pub fn select_district(&mut self, selection: DistrictSelection) {
        if self.selection != selection {
            self.selection = selection;
            self.recompute();
        }
    }

    /// Run the predictor on the current form inputs against the current
    /// fitted model. Without a usable model the form result stays empty;
    /// the Prediction view reports the fit error instead.
    pub fn run_prediction(&mut self) {
        let model = self
            .pipeline
            .as_ref()
            .and_then(|p| p.fit.as_ref().ok())
            .map(|report| &report.model);
        self.prediction.result =
            model.map(|m| predict::predict_with_outlook(m, &self.prediction.inputs));
    }
}
