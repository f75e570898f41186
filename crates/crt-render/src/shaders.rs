// ── Fullscreen pass vertex shader ───────────────────────────────────

pub const FULLSCREEN_VERTEX: &str = r#"#version 330 core

layout(location = 0) in vec2 a_pos;
layout(location = 1) in vec2 a_uv;

out vec2 v_uv;

void main() {
    v_uv = a_uv;
    gl_Position = vec4(a_pos, 0.0, 1.0);
}
"#;

// ── Mesh shaders (scene pass) ───────────────────────────────────────

pub const MESH_VERTEX: &str = r#"#version 330 core

layout(location = 0) in vec3 a_pos;
layout(location = 1) in vec3 a_normal;

uniform mat4 u_mvp;
uniform mat4 u_model;

out vec3 v_world_pos;
out vec3 v_normal;

void main() {
    vec4 world = u_model * vec4(a_pos, 1.0);
    v_world_pos = world.xyz;
    // Uniform scale only, so the model matrix rotates normals correctly.
    v_normal = mat3(u_model) * a_normal;
    gl_Position = u_mvp * vec4(a_pos, 1.0);
}
"#;

pub const MESH_FRAGMENT: &str = r#"#version 330 core

in vec3 v_world_pos;
in vec3 v_normal;

uniform vec3 u_light_pos[2];
uniform vec3 u_light_color[2];
uniform float u_light_intensity;

out vec4 frag_color;

const float PI = 3.14159265358979;

void main() {
    vec3 n = normalize(v_normal);
    vec3 albedo = vec3(0.8);

    // Two unattenuated point lights with candela-style normalization.
    vec3 lit = albedo * 0.15;
    for (int i = 0; i < 2; i++) {
        vec3 l = normalize(u_light_pos[i] - v_world_pos);
        float ndotl = max(dot(n, l), 0.0);
        lit += albedo * u_light_color[i] * (u_light_intensity / (4.0 * PI)) * ndotl;
    }

    frag_color = vec4(lit, 1.0);
}
"#;

// ── Color conversion library ────────────────────────────────────────
// Shared effect-math routines. The saturation path that used them is
// disabled, but they ship with the screen shader so effect variants can
// reach them. The tested Rust form lives in crt-core::colorspace.

pub const COLOR_CONVERSION: &str = r#"
vec3 rgb_to_hsl(vec3 rgb) {
    float cmin = min(rgb.r, min(rgb.g, rgb.b));
    float cmax = max(rgb.r, max(rgb.g, rgb.b));

    float l = (cmax + cmin) / 2.0;

    if (cmax == cmin) {
        return vec3(0.0, 0.0, l);
    }

    float chroma = cmax - cmin;

    float h;
    if (rgb.r == cmax) {
        h = mod((rgb.g - rgb.b) / chroma, 6.0);
    } else if (rgb.g == cmax) {
        h = (rgb.b - rgb.r) / chroma + 2.0;
    } else {
        h = (rgb.r - rgb.g) / chroma + 4.0;
    }
    h *= 60.0;

    float s = l < 0.5 ?
        chroma / (cmax + cmin) :
        chroma / (2.0 - cmax - cmin);

    return vec3(h, s, l);
}

float hsl_channel(vec3 hsl, float n) {
    float k = mod(n + hsl.x / 30.0, 12.0);
    float a = hsl.y * min(hsl.z, 1.0 - hsl.z);
    return hsl.z - a * max(-1.0, min(k - 3.0, min(9.0 - k, 1.0)));
}

vec3 hsl_to_rgb(vec3 hsl) {
    return vec3(
        hsl_channel(hsl, 0.0),
        hsl_channel(hsl, 8.0),
        hsl_channel(hsl, 4.0)
    );
}
"#;

// ── Screen pass fragment shader ─────────────────────────────────────

/// The CRT degradation effect. Stage order matters: curvature culls first,
/// every later noise stage samples through the grille-quantized UV, and the
/// scanline mask reads the original (uncurved) UV.
pub const SCREEN_FRAGMENT_BODY: &str = r#"
in vec2 v_uv;

uniform sampler2D u_image;
uniform float u_time;
uniform vec2 u_viewport;

uniform float u_resolution_ratio;

uniform float u_scanlines_intensity;

uniform float u_static_noise_intensity;
uniform float u_static_noise_frequency;

uniform float u_brightness_noise_intensity;
uniform float u_brightness_noise_frequency;

uniform float u_horizontal_tearing_intensity;
uniform float u_horizontal_tearing_frequency;

uniform float u_chromatic_aberration_intensity;

uniform float u_curvature_intensity;

uniform float u_vignette_intensity;
uniform float u_vignette_falloff;

uniform bool u_rolling_band_enabled;
uniform float u_rolling_band_duration;
uniform float u_rolling_band_height;
uniform float u_rolling_band_static_noise;
uniform float u_rolling_band_brightness_noise;
uniform float u_rolling_band_horizontal_tearing;
uniform float u_rolling_band_chromatic_aberration;

out vec4 frag_color;

const float PI = 3.14159265358979;

float rand(vec2 seed) {
    return fract(sin(dot(seed, vec2(12.9898, 78.233))) * 43758.5453);
}

void main() {
    vec3 out_color;
    vec2 out_uv;

    // Curvature

    vec2 centered_uv = v_uv * 2.0 - 1.0;
    vec2 offset = abs(centered_uv.yx) / u_curvature_intensity;
    vec2 curved_uv = (centered_uv + centered_uv * offset * offset) * 0.5 + 0.5;

    if (curved_uv.x < 0.0 || curved_uv.y < 0.0 || curved_uv.x > 1.0 || curved_uv.y > 1.0) {
        frag_color = vec4(0.0, 0.0, 0.0, 1.0);
        return;
    }

    out_uv = curved_uv;

    // Resolution quantization

    vec2 grille_resolution = u_viewport * u_resolution_ratio;
    vec2 grille_uv = (floor(curved_uv * grille_resolution) + 0.5) / grille_resolution;

    out_uv = grille_uv;

    // Rolling band

    float rolling_band = 0.0;

    if (u_rolling_band_enabled) {
        float band_time = 1.0 - fract(u_time / u_rolling_band_duration);

        float band_distance = (out_uv.y - band_time) / u_rolling_band_height;

        if (abs(band_distance) < 1.0) {
            rolling_band = cos(band_distance * PI) + 1.0;
            rolling_band += rolling_band * cos(band_distance * 7.0 + u_time * 5.0) * 0.2;
        }
    }

    // Horizontal tearing

    const float MAX_HORIZONTAL_TEARING = 0.01;

    float tearing_time = floor(u_time * u_horizontal_tearing_frequency);
    vec2 tearing_seed = vec2(grille_uv.y, tearing_time);

    out_uv.x += (rand(tearing_seed) * 2.0 - 1.0) * u_horizontal_tearing_intensity * MAX_HORIZONTAL_TEARING;
    out_uv.x -= rolling_band * u_rolling_band_horizontal_tearing * MAX_HORIZONTAL_TEARING;
    out_uv.x = clamp(out_uv.x, 0.01, 0.99);

    // Chromatic aberration

    out_color = texture(u_image, out_uv).rgb;

    const float MAX_CHROMATIC_ABERRATION = 0.01;

    float aberration = u_chromatic_aberration_intensity + rolling_band * u_rolling_band_chromatic_aberration;

    out_color.r = texture(u_image, out_uv + vec2(+aberration * MAX_CHROMATIC_ABERRATION, 0.0)).r;
    out_color.b = texture(u_image, out_uv + vec2(-aberration * MAX_CHROMATIC_ABERRATION, 0.0)).b;

    // Brightness noise

    float brightness_time = floor(u_time * u_brightness_noise_frequency);
    float brightness_noise = rand(grille_uv * brightness_time);

    out_color += vec3(brightness_noise) * u_brightness_noise_intensity;
    out_color += vec3(brightness_noise) * rolling_band * u_rolling_band_brightness_noise;

    // Static noise

    float static_time = floor(u_time * u_static_noise_frequency);
    float static_noise = rand(grille_uv * static_time);

    out_color = mix(out_color, vec3(static_noise),
        min(1.0, u_static_noise_intensity + abs(rolling_band) * u_rolling_band_static_noise));

    // Scanlines, masked from the uncurved UV

    float scanlines_mask = sin(fract(v_uv.y * grille_resolution.y) * PI);

    out_color *= mix(1.0, scanlines_mask, u_scanlines_intensity);

    // Vignette

    vec2 vignette_uv = out_uv * (1.0 - out_uv.yx);
    float vignette = pow(vignette_uv.x * vignette_uv.y * u_vignette_falloff, u_vignette_intensity);

    out_color *= vignette;

    frag_color = vec4(out_color, 1.0);
}
"#;

/// Complete screen fragment source: version header, the color-conversion
/// library, then the effect body.
pub fn screen_fragment() -> String {
    format!("#version 330 core\n{COLOR_CONVERSION}{SCREEN_FRAGMENT_BODY}")
}

// ── Output pass fragment shader ─────────────────────────────────────

pub const OUTPUT_FRAGMENT: &str = r#"#version 330 core

in vec2 v_uv;

uniform sampler2D u_image;

out vec4 frag_color;

// Piecewise linear-to-sRGB encoding.
vec3 srgb_encode(vec3 c) {
    vec3 lo = c * 12.92;
    vec3 hi = 1.055 * pow(c, vec3(1.0 / 2.4)) - 0.055;
    return mix(lo, hi, step(vec3(0.0031308), c));
}

void main() {
    vec3 color = texture(u_image, v_uv).rgb;
    frag_color = vec4(srgb_encode(color), 1.0);
}
"#;
