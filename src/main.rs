use bevy::prelude::*;
use spring_cloth::config::{CLOTH_WINDOW, PHYSICS_HZ};
use spring_cloth::physics::render::BACKGROUND;
use spring_cloth::ClothPlugin;
use tracing::error;

fn main() {
    let mut app = App::new();
    app
        // Dark grey background
        .insert_resource(ClearColor(BACKGROUND))
        // Configure the fixed timestep clock (used in FixedUpdate)
        .insert_resource(Time::<Fixed>::from_hz(PHYSICS_HZ))
        // Bevy's core engine features (LogPlugin installs the tracing subscriber)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "cloth".into(),
                resolution: CLOTH_WINDOW.into(),
                ..default()
            }),
            ..default()
        }));

    let cloth = ClothPlugin::default();
    if let Err(e) = cloth.config.validate().and_then(|()| cloth.grid.validate()) {
        error!("invalid cloth config: {e}");
        return;
    }

    app.add_plugins(cloth).run();
}
