use anyhow::{bail, Context};
use hexscout::{
    input::{events::MapEvent, KeyModifiers, SearchField},
    layers::LayerProperties,
    ApiConfig, DetailFetcher, DetailState, HexagonId, HttpLocationApi, InputEvent, LocationApi,
    MapConfig, MapController, Point, SearchBox,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
commands:
  search <lon> <lat>   jump to a point
  drag <dx> <dy>       pan by a pixel delta
  wheel <dy> [ctrl]    scroll; with ctrl, zoom in place
  at <x> <y>           click the hexagon under a pixel
  click <cell>         click a hexagon by its H3 index
  close                close the details panel
  resize <w> <h>       resize the viewport
  lockers              fetch parcel lockers around the center
  hexes                list rendered hexagons
  view                 print the viewport
  quit";

/// Headless driver: reads map commands from stdin, prints what a UI would show
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    hexscout::init_logging();

    let config = MapConfig::with_api(ApiConfig::from_env());
    log::info!("scoring backend at {}", config.api.base_url);
    let api: Arc<dyn LocationApi> =
        Arc::new(HttpLocationApi::for_map(&config).context("building HTTP client")?);

    let mut search = SearchBox::new(&config);
    let mut map = MapController::new(config, api.clone());
    let mut details = DetailFetcher::new(api);
    let events = map.subscribe();

    println!("{HELP}");
    print_view(&map);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(Duration::from_millis(50));

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match run_command(line.trim(), &mut map, &mut search).await {
                    Ok(true) => break,
                    Ok(false) => {}
                    Err(e) => println!("error: {e:#}"),
                }
            }
            _ = ticker.tick() => {
                map.poll();
                if details.poll() {
                    print_details(details.state());
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }

        for event in events.try_iter() {
            match event {
                MapEvent::SelectionChanged { selected } => {
                    details.select(selected);
                    print_details(details.state());
                }
                MapEvent::HexagonsChanged { resolution, count } => {
                    println!("grid: {count} hexagons at resolution {resolution}");
                }
                MapEvent::ZoomSettled { zoom } => println!("zoom settled at {zoom:.2}"),
                MapEvent::LockersChanged { count } => println!("{count} parcel lockers shown"),
                MapEvent::ViewChanged { .. } => {}
            }
        }
    }

    Ok(())
}

/// Returns `Ok(true)` when the driver should exit
async fn run_command(
    line: &str,
    map: &mut MapController,
    search: &mut SearchBox,
) -> anyhow::Result<bool> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [] => {}
        ["quit"] | ["exit"] => return Ok(true),
        ["help"] => println!("{HELP}"),
        ["search", lon, lat] => {
            if !search.edit(SearchField::Longitude, lon) || !search.edit(SearchField::Latitude, lat)
            {
                bail!("only digits, one dot and a leading minus are accepted");
            }
            let jump = search.submit()?;
            map.jump_to(jump);
            print_view(map);
        }
        ["drag", dx, dy] => {
            let delta = Point::new(dx.parse()?, dy.parse()?);
            map.handle_input(InputEvent::Drag { delta });
            print_view(map);
        }
        ["wheel", dy, rest @ ..] => {
            let modifiers = if rest.contains(&"ctrl") {
                KeyModifiers::ctrl()
            } else {
                KeyModifiers::default()
            };
            let size = map.viewport().size;
            map.handle_input(InputEvent::Wheel {
                delta_y: dy.parse()?,
                position: Point::new(size.x / 2.0, size.y / 2.0),
                modifiers,
            });
            print_view(map);
        }
        ["at", x, y] => {
            let pixel = Point::new(x.parse()?, y.parse()?);
            let point = map.viewport().pixel_to_lat_lng(&pixel);
            let id = HexagonId::from_lat_lng(&point, map.resolution())?;
            click(map, id);
        }
        ["click", cell] => {
            let id: HexagonId = cell.parse()?;
            click(map, id);
        }
        ["close"] => map.clear_selection(),
        ["resize", w, h] => {
            let size = Point::new(w.parse()?, h.parse()?);
            map.handle_input(InputEvent::Resize { size });
            print_view(map);
        }
        ["lockers"] => {
            if let Err(e) = map.refresh_parcel_lockers().await {
                bail!("could not load parcel lockers: {e}");
            }
            let layer = map.locker_layer();
            print_layer(layer.properties());
            for marker in layer.visible_markers() {
                let position = marker.position();
                println!(
                    "  {} at ({:.5}, {:.5}) {}",
                    marker.id(),
                    position.lng,
                    position.lat,
                    marker.popup().unwrap_or_default()
                );
            }
        }
        ["hexes"] => {
            let layer = map.hexagon_layer();
            print_layer(layer.properties());
            for feature in layer.features() {
                let mark = if feature.selected { "*" } else { " " };
                println!(" {mark} {}", feature.id);
            }
        }
        ["view"] => print_view(map),
        _ => bail!("unknown command {line:?}, try `help`"),
    }
    Ok(false)
}

fn click(map: &mut MapController, id: HexagonId) {
    if map.handle_input(InputEvent::HexagonClick { id }) == hexscout::input::EventHandled::NotHandled
    {
        println!("{id} is not on screen");
    }
}

fn print_layer(properties: &LayerProperties) {
    println!(
        "layer {} ({:?}, z {})",
        properties.id, properties.layer_type, properties.z_index
    );
}

fn print_view(map: &MapController) {
    let viewport = map.viewport();
    let bounds = map.bounds();
    println!(
        "center ({:.5}, {:.5}) zoom {:.2} | bounds N {:.5} S {:.5} E {:.5} W {:.5}",
        viewport.center.lng,
        viewport.center.lat,
        viewport.zoom,
        bounds.north,
        bounds.south,
        bounds.east,
        bounds.west
    );
}

fn print_details(state: &DetailState) {
    match state {
        DetailState::Hidden => println!("details closed"),
        DetailState::Loading { id } => println!("loading details for {id}..."),
        DetailState::Unavailable { id } => println!("{id}: no data available"),
        DetailState::Loaded { id, score } => {
            println!(
                "{id}: score {} ({})",
                score.score_text(),
                score.grade().label()
            );
            for (label, value) in score.rows() {
                println!("  {label}: {value}");
            }
        }
    }
}
