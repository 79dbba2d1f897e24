//! Read-only location map built from raw OpenStreetMap tiles.
//!
//! The container is measured once after the first render; the tile layout
//! for that width comes from `common::map::MapView`. Tiles ignore pointer
//! events, so the map cannot be dragged, zoomed or clicked.

use common::config::{MAP_CENTER_LAT, MAP_CENTER_LNG, MAP_HEIGHT_PX, MAP_ZOOM};
use common::map::{LatLng, MapView, TILE_SIZE};
use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MapProps {
    #[prop_or(MAP_CENTER_LAT)]
    pub latitude: f64,
    #[prop_or(MAP_CENTER_LNG)]
    pub longitude: f64,
    #[prop_or(MAP_ZOOM)]
    pub zoom: u8,
    #[prop_or(MAP_HEIGHT_PX)]
    pub height_px: u32,
}

pub enum Msg {
    Measured(u32),
}

pub struct MapComponent {
    container: NodeRef,
    width_px: u32,
}

impl Component for MapComponent {
    type Message = Msg;
    type Properties = MapProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            container: NodeRef::default(),
            width_px: 0,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Measured(width_px) => {
                let changed = self.width_px != width_px;
                self.width_px = width_px;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let view = MapView {
            center: LatLng {
                lat: props.latitude,
                lng: props.longitude,
            },
            zoom: props.zoom,
            width_px: self.width_px,
            height_px: props.height_px,
        };
        let style = format!(
            "position: relative; overflow: hidden; width: 100%; height: {}px; background: #e5e3df;",
            props.height_px
        );

        html! {
            <div class="map" ref={self.container.clone()} style={style} aria-label="Map of our shelter">
                { for view.tiles().into_iter().map(|tile| {
                    let style = format!(
                        "position: absolute; left: {}px; top: {}px; width: {size}px; height: {size}px; pointer-events: none; user-select: none;",
                        tile.left_px,
                        tile.top_px,
                        size = TILE_SIZE,
                    );
                    html! {
                        <img key={tile.url.clone()} src={tile.url.clone()} style={style} alt="" draggable="false" />
                    }
                }) }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            if let Some(container) = self.container.cast::<HtmlElement>() {
                let width = container.client_width().max(0) as u32;
                ctx.link().send_message(Msg::Measured(width));
            }
        }
    }
}
