use bevy::{
    pbr::{FogFalloff, FogSettings},
    prelude::*,
    window::PrimaryWindow,
};

/// Fog falloff selected with the toggle key.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FogMode {
    #[default]
    Linear = 0,
    Exponential = 1,
    ExponentialSquared = 2,
}

impl FogMode {
    pub fn next(self) -> Self {
        match self {
            FogMode::Linear => FogMode::Exponential,
            FogMode::Exponential => FogMode::ExponentialSquared,
            FogMode::ExponentialSquared => FogMode::Linear,
        }
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn label(self) -> &'static str {
        match self {
            FogMode::Linear => "Linear Fog",
            FogMode::Exponential => "EXP Fog",
            FogMode::ExponentialSquared => "EXP2 Fog",
        }
    }

    pub fn falloff(self, params: &FogParams) -> FogFalloff {
        match self {
            FogMode::Linear => FogFalloff::Linear {
                start: params.start,
                end: params.end,
            },
            FogMode::Exponential => FogFalloff::Exponential {
                density: params.density,
            },
            FogMode::ExponentialSquared => FogFalloff::ExponentialSquared {
                density: params.density,
            },
        }
    }
}

/// Fixed fog parameters shared by the terrain and the water.
#[derive(Resource, Clone, Debug)]
pub struct FogParams {
    pub color: Color,
    pub start: f32,
    pub end: f32,
    pub density: f32,
}

impl Default for FogParams {
    fn default() -> Self {
        Self {
            color: Color::rgb(0.5, 0.5, 0.5),
            start: 20.0,
            end: 50.0,
            density: 0.03,
        }
    }
}

pub fn fog_settings(mode: FogMode, params: &FogParams) -> FogSettings {
    FogSettings {
        color: params.color,
        falloff: mode.falloff(params),
        ..default()
    }
}

pub fn window_title(mode: FogMode) -> String {
    format!("Simple Fog - {}", mode.label())
}

pub fn toggle_fog_mode(
    keys: Res<Input<KeyCode>>,
    params: Res<FogParams>,
    mut mode: ResMut<FogMode>,
    mut fogs: Query<&mut FogSettings>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !keys.just_pressed(KeyCode::Space) {
        return;
    }

    *mode = mode.next();
    info!("Switched to {} (fog_type = {})", mode.label(), mode.index());

    for mut fog in &mut fogs {
        fog.falloff = mode.falloff(&params);
    }

    for mut window in &mut windows {
        window.title = window_title(*mode);
    }
}
