use dioxus::prelude::*;
use crate::config::MapConfig;
use crate::domain::geo::{Viewport, TILE_SIZE};
use crate::domain::place::MapMarker;

/// Interaction state of the map: where it looks, an in-progress drag and
/// which popup (if any) is open. At most one popup is open at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapState {
    pub viewport: Viewport,
    pub initial: Viewport,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub drag_origin: Option<(f64, f64)>,
    pub open_popup: Option<usize>,
}

impl MapState {
    pub fn new(config: &MapConfig) -> Self {
        let initial = config.initial_viewport();
        Self {
            viewport: initial,
            initial,
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            drag_origin: None,
            open_popup: None,
        }
    }

    pub fn can_zoom_in(&self) -> bool {
        self.viewport.zoom < self.max_zoom
    }

    pub fn can_zoom_out(&self) -> bool {
        self.viewport.zoom > self.min_zoom
    }

    /// Opens the popup at `index`, closing any other; clicking the open one closes it
    pub fn toggle_popup(&mut self, index: usize) {
        self.open_popup = toggled(self.open_popup, index);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.viewport.zoom.saturating_add(1));
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.viewport.zoom.saturating_sub(1));
    }

    fn set_zoom(&mut self, zoom: u8) {
        self.viewport = self.viewport.with_zoom(zoom, self.min_zoom, self.max_zoom);
    }

    /// Vertical wheel movement zooms one level; returns false for events
    /// without vertical movement, which are left alone.
    pub fn wheel(&mut self, delta_y: f64) -> bool {
        if delta_y < 0.0 {
            self.zoom_in();
        } else if delta_y > 0.0 {
            self.zoom_out();
        } else {
            return false;
        }
        true
    }

    pub fn start_drag(&mut self, x: f64, y: f64) {
        self.drag_origin = Some((x, y));
    }

    pub fn drag_to(&mut self, x: f64, y: f64) {
        if let Some((start_x, start_y)) = self.drag_origin {
            self.viewport = self.viewport.panned_by(x - start_x, y - start_y);
            self.drag_origin = Some((x, y));
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_origin = None;
    }

    pub fn reset(&mut self) {
        self.viewport = self.initial;
        self.open_popup = None;
        self.drag_origin = None;
    }
}

fn toggled(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) { None } else { Some(index) }
}

/// Slippy map: tiles from the configured source with one pin per marker.
/// Drag to pan, wheel or the +/- buttons to zoom, click a pin for its popup.
#[component]
pub fn MapView(config: MapConfig, markers: Vec<MapMarker>) -> Element {
    let mut state = use_signal(|| MapState::new(&config));

    let current = *state.read();
    let height = config.height_px;
    let tile_layer = config.tile_layer();
    let tiles = current.viewport.visible_tiles(
        f64::from(config.max_width_px) / 2.0,
        f64::from(config.height_px) / 2.0,
    );
    let cursor = if current.drag_origin.is_some() { "grabbing" } else { "grab" };

    rsx! {
        div {
            class: "map-view",

            h2 { "📍 London Live Activity Map" }

            div {
                class: "map-surface",
                style: "position: relative; overflow: hidden; width: 100%; height: {height}px;
                       border-radius: 8px; background: #dde3e8; cursor: {cursor}; user-select: none;",
                prevent_default: "onwheel",

                onmousedown: move |evt| {
                    let point = evt.client_coordinates();
                    state.write().start_drag(point.x, point.y);
                },

                onmousemove: move |evt| {
                    if state.read().drag_origin.is_some() {
                        let point = evt.client_coordinates();
                        state.write().drag_to(point.x, point.y);
                    }
                },

                onmouseup: move |_| state.write().end_drag(),
                onmouseleave: move |_| state.write().end_drag(),

                onwheel: move |evt| {
                    let delta = evt.delta().strip_units().y;
                    if delta != 0.0 {
                        state.write().wheel(delta);
                    }
                },

                // Tile layer
                div {
                    class: "tile-pane",
                    for tile in tiles.iter() {
                        img {
                            key: "{tile.zoom}/{tile.column}/{tile.y}",
                            class: "map-tile",
                            src: tile_layer.tile_url(tile.zoom, tile.x, tile.y),
                            alt: "",
                            draggable: "false",
                            style: "position: absolute; left: calc(50% + {tile.offset_x}px); top: calc(50% + {tile.offset_y}px);
                                   width: {TILE_SIZE}px; height: {TILE_SIZE}px; pointer-events: none;",
                        }
                    }
                }

                // Marker layer
                div {
                    class: "marker-pane",
                    for (index, marker) in markers.iter().enumerate() {
                        MarkerPin {
                            key: "{index}",
                            marker: marker.clone(),
                            offset: current.viewport.offset_of(marker.position),
                            open: current.open_popup == Some(index),
                            on_toggle: move |_| state.write().toggle_popup(index),
                        }
                    }
                }

                ZoomControls {
                    can_zoom_in: current.can_zoom_in(),
                    can_zoom_out: current.can_zoom_out(),
                    on_zoom_in: move |_| state.write().zoom_in(),
                    on_zoom_out: move |_| state.write().zoom_out(),
                    on_reset: move |_| state.write().reset(),
                }

                div {
                    class: "map-attribution",
                    style: "position: absolute; right: 0; bottom: 0; padding: 2px 6px;
                           background: rgba(255, 255, 255, 0.8); font-size: 11px; z-index: 20;",
                    "{config.attribution}"
                }
            }
        }
    }
}

#[component]
fn MarkerPin(marker: MapMarker, offset: (f64, f64), open: bool, on_toggle: EventHandler<()>) -> Element {
    let (dx, dy) = offset;
    let color = marker.kind.pin_color();

    rsx! {
        div {
            class: marker.kind.css_class(),
            title: "{marker.title}",
            style: "position: absolute; left: calc(50% + {dx}px); top: calc(50% + {dy}px);
                   transform: translate(-50%, -100%); cursor: pointer; z-index: 10;",

            // Keep clicks on a pin from starting a pan
            onmousedown: move |evt| evt.stop_propagation(),
            onclick: move |evt| {
                evt.stop_propagation();
                on_toggle.call(());
            },

            div {
                class: "marker-pin",
                style: "width: 18px; height: 18px; border-radius: 50% 50% 50% 0; background: {color};
                       transform: rotate(-45deg); border: 2px solid white;
                       box-shadow: 0 1px 4px rgba(0, 0, 0, 0.4);",
            }

            if open {
                div {
                    class: "marker-popup",
                    style: "position: absolute; bottom: 28px; left: 50%; transform: translateX(-50%);
                           background: white; padding: 8px 12px; border-radius: 8px; white-space: nowrap;
                           box-shadow: 0 3px 14px rgba(0, 0, 0, 0.4); cursor: auto;",
                    strong { "{marker.title}" }
                    br {}
                    "{marker.detail}"
                }
            }
        }
    }
}

#[component]
fn ZoomControls(
    can_zoom_in: bool,
    can_zoom_out: bool,
    on_zoom_in: EventHandler<()>,
    on_zoom_out: EventHandler<()>,
    on_reset: EventHandler<()>,
) -> Element {
    let button_style = "display: block; width: 30px; height: 30px; border: none; border-bottom: 1px solid #ccc;
                        background: white; font-size: 18px; cursor: pointer;";

    rsx! {
        div {
            class: "map-controls",
            style: "position: absolute; top: 10px; left: 10px; z-index: 20; border-radius: 4px;
                   overflow: hidden; box-shadow: 0 1px 5px rgba(0, 0, 0, 0.4);",
            onmousedown: move |evt| evt.stop_propagation(),

            button {
                class: "zoom-in",
                style: "{button_style}",
                disabled: !can_zoom_in,
                onclick: move |_| on_zoom_in.call(()),
                "+"
            }
            button {
                class: "zoom-out",
                style: "{button_style}",
                disabled: !can_zoom_out,
                onclick: move |_| on_zoom_out.call(()),
                "−"
            }
            button {
                class: "zoom-reset",
                style: "{button_style}",
                onclick: move |_| on_reset.call(()),
                "⟲"
            }
        }
    }
}
