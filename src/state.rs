use crate::data::model::StudentDataset;
use crate::eda::EdaReport;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which of the three EDA views the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotKind {
    #[default]
    Histogram,
    BoxPlot,
    Heatmap,
}

impl PlotKind {
    pub const ALL: [PlotKind; 3] = [PlotKind::Histogram, PlotKind::BoxPlot, PlotKind::Heatmap];

    pub fn label(self) -> &'static str {
        match self {
            PlotKind::Histogram => "Average Score Distribution",
            PlotKind::BoxPlot => "Average Score by Gender",
            PlotKind::Heatmap => "Correlation Matrix",
        }
    }
}

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded, augmented dataset (None until a file is analysed).
    pub dataset: Option<StudentDataset>,

    /// Plot artifacts computed from the dataset.
    pub report: Option<EdaReport>,

    /// Currently displayed plot.
    pub active_plot: PlotKind,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest the result of an EDA run.
    pub fn set_analysis(&mut self, dataset: StudentDataset, report: EdaReport) {
        self.dataset = Some(dataset);
        self.report = Some(report);
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eda;

    #[test]
    fn set_analysis_clears_stale_status() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stud.csv");
        std::fs::write(
            &path,
            "math_score,reading_score,writing_score,gender,test_preparation\n\
             80,90,70,F,completed\n\
             60,50,55,M,none\n",
        )
        .unwrap();
        let (ds, report) = eda::run(&path).unwrap();

        let mut state = AppState::default();
        state.status_message = Some("Error: old".into());
        state.set_analysis(ds, report);

        assert!(state.status_message.is_none());
        assert!(state.dataset.is_some());
        assert_eq!(state.active_plot, PlotKind::Histogram);
    }
}
