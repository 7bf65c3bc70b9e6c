// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use understory_drawing_model::Metadata;
use understory_drawing_selection::{SelectionEvent, SelectionIntent};

use crate::{
    ContextSummary, DeriveError, ExplorerConfig, ExplorerView, LoadError, LoadState,
    MetadataSource, OverlayCanvas, OverlayLayer, PlacedOverlay, SpaceMarker,
    compute_overlay_layers, default_region_layer, derive_view, load_metadata, space_markers,
};

/// One explorer session.
///
/// Owns the configuration, the metadata load state, the user's selection
/// intent and the image measurements. Everything shown is derived on demand
/// from these; nothing derived is stored.
#[derive(Clone, Debug, Default)]
pub struct Explorer {
    config: ExplorerConfig,
    state: LoadState,
    intent: SelectionIntent,
    canvas: OverlayCanvas,
}

impl Explorer {
    /// Creates a session whose metadata is still loading.
    #[must_use]
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            config,
            state: LoadState::Loading,
            intent: SelectionIntent::new(),
            canvas: OverlayCanvas::new(),
        }
    }

    /// Creates a session with metadata that is already loaded.
    #[must_use]
    pub fn with_metadata(config: ExplorerConfig, metadata: Metadata) -> Self {
        let mut explorer = Self::new(config);
        explorer.state = LoadState::Ready(metadata);
        explorer
    }

    /// Loads the metadata from the configured location.
    ///
    /// This is the session's single load attempt; a failure is kept as the
    /// session's error.
    pub fn load(&mut self) -> &LoadState {
        let source = MetadataSource::from_location(&self.config.metadata_path);
        self.finish_load(load_metadata(&source))
    }

    /// Records the outcome of a load performed elsewhere.
    pub fn finish_load(&mut self, result: Result<Metadata, LoadError>) -> &LoadState {
        self.state = LoadState::from_result(result);
        self.forget_hidden_images();
        &self.state
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Returns the load state.
    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.state
    }

    /// Returns the current selection intent.
    #[must_use]
    pub fn intent(&self) -> &SelectionIntent {
        &self.intent
    }

    /// Returns the image measurements.
    #[must_use]
    pub fn canvas(&self) -> &OverlayCanvas {
        &self.canvas
    }

    /// Applies a user action. Returns `true` if the intent changed.
    pub fn dispatch(&mut self, event: SelectionEvent) -> bool {
        let changed = self.intent.apply(event);
        if changed {
            self.forget_hidden_images();
        }
        changed
    }

    /// Derives the current view.
    ///
    /// # Errors
    ///
    /// See [`derive_view`].
    pub fn view(&self) -> Result<ExplorerView<'_>, DeriveError> {
        derive_view(self.state.metadata(), &self.intent)
    }

    /// Returns the message to show instead of the view, if any.
    ///
    /// `None` while loading and when the view can be derived.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match &self.state {
            LoadState::Loading => None,
            LoadState::Failed(message) => Some(message.clone()),
            LoadState::Ready(_) => self.view().err().map(|err| err.to_string()),
        }
    }

    /// Returns the URL of the base image.
    #[must_use]
    pub fn base_image_url(&self) -> Option<String> {
        let view = self.view().ok()?;
        Some(self.config.drawing_url(view.base_image?))
    }

    /// Records a measurement of the current base image.
    ///
    /// Only the current base image and root image keep their measurements;
    /// an image that stops being shown is measured again when it returns.
    /// Returns `true` if overlay placements may have changed.
    pub fn observe_base_image(&mut self, natural: Size, rendered: Size) -> bool {
        let Some(base_image) = self.view().ok().and_then(|v| v.base_image.map(str::to_owned)) else {
            return false;
        };
        self.canvas.observe(&base_image, natural, rendered)
    }

    /// Records a measurement of the root image that spaces are outlined on.
    pub fn observe_root_image(&mut self, natural: Size, rendered: Size) -> bool {
        let Some(root_image) = self.view().ok().map(|v| v.root.image.clone()) else {
            return false;
        };
        self.canvas.observe(&root_image, natural, rendered)
    }

    fn forget_hidden_images(&mut self) {
        let shown: Vec<String> = match self.view() {
            Ok(view) => view
                .base_image
                .into_iter()
                .chain([view.root.image.as_str()])
                .map(str::to_owned)
                .collect(),
            Err(_) => Vec::new(),
        };
        self.canvas.retain(|image| shown.iter().any(|s| s == image));
    }

    /// Returns the layers drawn over the base image, bottom first: the
    /// selected region's layer, then the overlay disciplines in the order
    /// they were switched on.
    #[must_use]
    pub fn overlay_layers(&self) -> Vec<OverlayLayer> {
        let Ok(view) = self.view() else {
            return Vec::new();
        };
        default_region_layer(&view, &self.config)
            .into_iter()
            .chain(compute_overlay_layers(&view, &self.config))
            .collect()
    }

    /// Returns [`Explorer::overlay_layers`] with their placements over the
    /// base image.
    #[must_use]
    pub fn placed_overlays(&self) -> Vec<PlacedOverlay> {
        let Ok(view) = self.view() else {
            return Vec::new();
        };
        let Some(base_image) = view.base_image else {
            return Vec::new();
        };
        self.canvas.place(base_image, self.overlay_layers())
    }

    /// Returns the space outlines on the root image.
    #[must_use]
    pub fn space_markers(&self) -> Vec<SpaceMarker<'_>> {
        let Ok(view) = self.view() else {
            return Vec::new();
        };
        space_markers(
            &view.spaces,
            view.space.map(|s| s.id.as_str()),
            self.canvas.metrics_for(&view.root.image),
        )
    }

    /// Summarizes the current selection for display.
    ///
    /// # Errors
    ///
    /// See [`derive_view`].
    pub fn context(&self) -> Result<ContextSummary<'_>, DeriveError> {
        self.view().map(|view| ContextSummary::from_view(&view))
    }
}
