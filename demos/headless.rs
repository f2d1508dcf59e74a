use tileview::prelude::*;

/// Example of driving a viewport without any UI
fn main() -> tileview::Result<()> {
    tileview::init_logging();

    println!("tileview headless example");
    println!("=========================");

    let config = ViewportConfig::from_json_str(
        r#"{ "max_zoom": 19, "animation": { "duration_ms": 250 } }"#,
    )?;
    let center = LatLng::try_new(37.7749, -122.4194)?; // San Francisco
    let mut viewport = Viewport::new(center, 12.0, Size::new(1024.0, 768.0), config);

    println!(
        "center {:.4}, {:.4} at zoom {} ({}x{})",
        viewport.center().lat,
        viewport.center().lng,
        viewport.zoom(),
        viewport.size().width,
        viewport.size().height
    );

    let layout = viewport.tile_layout();
    println!("{} tiles at zoom {}:", layout.len(), layout.zoom);
    for tile in layout.tiles.iter().take(4) {
        println!(
            "   {}/{}/{} at ({:.1}, {:.1})",
            tile.coord.z, tile.coord.x, tile.coord.y, tile.position.x, tile.position.y
        );
    }

    println!("\nPanning:");
    for (dx, dy) in [(100.0, 0.0), (0.0, 100.0), (-50.0, -50.0)] {
        let center = viewport.pan(Point::new(dx, dy));
        println!("   drag ({dx}, {dy}) -> {:.5}, {:.5}", center.lat, center.lng);
    }

    println!("\nAnimating a zoom around the cursor:");
    let clock = ManualClock::new(0.0);
    let cursor = viewport.pixel_to_lat_lng(&Point::new(700.0, 200.0));
    if let Some(transition) = viewport.fly_to(cursor, 14.0, Some(cursor), &clock) {
        loop {
            clock.advance(50.0);
            let frame = viewport.apply_transition_frame(&transition, &clock);
            println!(
                "   t={:>3}ms zoom {:.3} center {:.5}, {:.5}",
                clock.now_ms(),
                frame.zoom,
                frame.center.lat,
                frame.center.lng
            );
            if frame.finished {
                break;
            }
        }
    }

    println!("\nJumping across the globe:");
    let tokyo = LatLng::new(35.6762, 139.6503);
    println!(
        "   {:.1} screens away",
        viewport.distance_in_screens(&tokyo, 10.0)
    );
    if viewport.fly_to(tokyo, 10.0, None, &clock).is_none() {
        println!("   too far to animate, now at {:?}", viewport.center());
    }

    let bounds = viewport.bounds();
    println!(
        "\ncenter envelope: lat [{:.4}, {:.4}] lng [{:.4}, {:.4}]",
        bounds.min_lat, bounds.max_lat, bounds.min_lng, bounds.max_lng
    );

    Ok(())
}
