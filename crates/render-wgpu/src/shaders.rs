/// WGSL shader for the displaced, vertex-colored floor.
pub const FLOOR_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
    fog_color: vec4<f32>,
    fog_range: vec4<f32>,
    sky_color: vec4<f32>,
    ground_color: vec4<f32>,
    light_dir: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct FloorVertex {
    @location(0) position: vec3<f32>,
    @location(1) color: vec3<f32>,
};

struct FloorOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) color: vec3<f32>,
};

@vertex
fn vs_floor(vertex: FloorVertex) -> FloorOutput {
    var out: FloorOutput;
    out.clip_position = uniforms.view_proj * vec4<f32>(vertex.position, 1.0);
    out.world_pos = vertex.position;
    out.color = vertex.color;
    return out;
}

@fragment
fn fs_floor(in: FloorOutput) -> @location(0) vec4<f32> {
    let dist = distance(in.world_pos, uniforms.camera_pos.xyz);
    let fog = clamp(
        (dist - uniforms.fog_range.x) / (uniforms.fog_range.y - uniforms.fog_range.x),
        0.0,
        1.0,
    );
    return vec4<f32>(mix(in.color, uniforms.fog_color.rgb, fog), 1.0);
}
"#;

/// WGSL shader for the textured exhibit panels (double-sided).
pub const PANEL_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
    fog_color: vec4<f32>,
    fog_range: vec4<f32>,
    sky_color: vec4<f32>,
    ground_color: vec4<f32>,
    light_dir: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

@group(1) @binding(0)
var panel_texture: texture_2d<f32>;
@group(1) @binding(1)
var panel_sampler: sampler;

struct PanelVertex {
    @location(0) position: vec3<f32>,
    @location(1) uv: vec2<f32>,
};

struct PanelOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) uv: vec2<f32>,
};

@vertex
fn vs_panel(vertex: PanelVertex) -> PanelOutput {
    var out: PanelOutput;
    out.clip_position = uniforms.view_proj * vec4<f32>(vertex.position, 1.0);
    out.world_pos = vertex.position;
    out.uv = vertex.uv;
    return out;
}

@fragment
fn fs_panel(in: PanelOutput) -> @location(0) vec4<f32> {
    let albedo = textureSample(panel_texture, panel_sampler, in.uv);
    let dist = distance(in.world_pos, uniforms.camera_pos.xyz);
    let fog = clamp(
        (dist - uniforms.fog_range.x) / (uniforms.fog_range.y - uniforms.fog_range.x),
        0.0,
        1.0,
    );
    return vec4<f32>(mix(albedo.rgb, uniforms.fog_color.rgb, fog), albedo.a);
}
"#;

/// WGSL shader for the prop stand-in box, lit by the hemisphere light.
pub const PROP_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
    fog_color: vec4<f32>,
    fog_range: vec4<f32>,
    sky_color: vec4<f32>,
    ground_color: vec4<f32>,
    light_dir: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct PropVertex {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct PropInstance {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
    @location(6) color: vec4<f32>,
};

struct PropOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) color: vec4<f32>,
};

@vertex
fn vs_prop(vertex: PropVertex, instance: PropInstance) -> PropOutput {
    let model = mat4x4<f32>(
        instance.model_0,
        instance.model_1,
        instance.model_2,
        instance.model_3,
    );
    let world_pos = model * vec4<f32>(vertex.position, 1.0);
    let world_normal = (model * vec4<f32>(vertex.normal, 0.0)).xyz;

    var out: PropOutput;
    out.clip_position = uniforms.view_proj * world_pos;
    out.world_pos = world_pos.xyz;
    out.world_normal = normalize(world_normal);
    out.color = instance.color;
    return out;
}

@fragment
fn fs_prop(in: PropOutput) -> @location(0) vec4<f32> {
    // Hemisphere lighting: blend ground and sky colors by how much the
    // surface faces the light's up direction.
    let up = normalize(uniforms.light_dir.xyz);
    let blend = dot(in.world_normal, up) * 0.5 + 0.5;
    let hemi = mix(uniforms.ground_color.rgb, uniforms.sky_color.rgb, blend);
    let lit = in.color.rgb * hemi * uniforms.light_dir.w;

    let dist = distance(in.world_pos, uniforms.camera_pos.xyz);
    let fog = clamp(
        (dist - uniforms.fog_range.x) / (uniforms.fog_range.y - uniforms.fog_range.x),
        0.0,
        1.0,
    );
    return vec4<f32>(mix(lit, uniforms.fog_color.rgb, fog), in.color.a);
}
"#;
