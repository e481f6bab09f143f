use sprites::{Config, Point, SpriteRegistry, Vector};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_env()?;
    log::info!("coordinate policy: {}", config.coordinate_policy);

    let mut registry = SpriteRegistry::new(config);

    let sprite = registry.spawn(Point::new(0f64, 1f64))?;
    println!("Sprite at {}", registry.position(sprite)?);

    registry.move_to(sprite, Point::new(1f64, 2f64))?;
    println!("Moved to {}", registry.position(sprite)?);

    registry.move_by(sprite, Vector::new(-4f64, 2f64))?;
    println!("Moved by {} to {}", Vector::new(-4f64, 2f64), registry.position(sprite)?);

    Ok(())
}
