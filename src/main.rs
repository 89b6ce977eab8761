//! Infinite hexagon viewer.
//!
//! Drag, scroll, or use the arrow keys to pan; click a hexagon to flip it.
//! Tab opens the world inspector, Escape quits.

#[cfg(feature = "native")]
mod cli;

use bevy::app::AppExit;
use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use infinite_hexagons::GameState;
use infinite_hexagons::hud::HudPlugin;
use infinite_hexagons::scroll::{ScrollConfig, ScrollPlugin};
use infinite_hexagons::tiles::{TileConfig, TilesPlugin};

fn main() {
    #[cfg_attr(not(feature = "native"), allow(unused_mut))]
    let mut tiles = TileConfig::default();
    #[cfg_attr(not(feature = "native"), allow(unused_mut))]
    let mut scroll = ScrollConfig::default();
    #[cfg(feature = "native")]
    {
        use clap::Parser;
        cli::Cli::parse().apply(&mut tiles, &mut scroll);
    }

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Infinite Hexagons".into(),
            ..default()
        }),
        ..default()
    }))
    .register_type::<GameState>()
    .init_state::<GameState>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(ScrollPlugin(scroll))
    .add_plugins(TilesPlugin(tiles))
    .add_plugins(HudPlugin)
    .add_systems(Update, exit_on_esc)
    .add_systems(Update, toggle_inspector)
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(GameState::Debugging)));

    #[cfg(feature = "native")]
    {
        use bevy::remote::{RemotePlugin, http::RemoteHttpPlugin};
        app.add_plugins(RemotePlugin::default())
            .add_plugins(RemoteHttpPlugin::default());
    }

    app.run();
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        let new_state = match state.get() {
            GameState::Running => GameState::Debugging,
            GameState::Debugging => GameState::Running,
        };
        info!("switching to {new_state:?}");
        next.set(new_state);
    }
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
