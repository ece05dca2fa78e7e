//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Haptics Visualizer Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# The remote host is always given on the command line.

[network]
# bind_address = "0.0.0.0"
# local_port = 5556             # 0 = ephemeral
# remote_port = 5557            # 1-65535
# byte_order = "native"         # native | little | big
# receive_policy = "drain"      # drain (newest queued value wins) | single (one recv per poll)
# max_datagrams_per_poll = 64   # 1-4096, drain mode only
# on_malformed = "discard"      # discard | fatal

[transform]
# scene = scale * raw + shift, per component
# scale = 10.0
# shift = 0.0

[window]
# title = "Haptics Demo"
# startup_mode = "maximized"    # windowed | maximized | fullscreen
# width = 1280                  # windowed mode only
# height = 800

[animation]
# period_ms = 25                # 1-1000
# step_degrees = 1.0            # 0-360

[scene]
# background = [0.0, 0.0, 0.0, 1.0]
# vsync = true
# mesh_detail = 32              # 3-256 slices/stacks per sphere

[scene.camera]
# distance = 25.0
# tilt_degrees = 20.0
# fov_degrees = 45.0            # 1-179
# near = 1.0
# far = 200.0

[scene.lighting]
# position = [-14.0, 7.0, 28.0] # eye space
# global_ambient = [0.2, 0.2, 0.2]
# ambient = [0.2, 0.2, 0.2]
# diffuse = [0.8, 0.8, 0.8]
# specular = [1.0, 1.0, 1.0]
# material_specular = [0.0, 1.0, 1.0]
# shininess = 128.0             # 0-128

[scene.marker]
# radius = 0.3
# color = [1.0, 0.0, 0.0, 1.0]

[scene.sphere]
# center = [-3.0, 0.0, 4.0]
# radius = 2.0
# color = [0.0, 1.0, 0.0, 0.6]

[scene.cube]
# center = [4.0, 0.0, 3.5]
# side = 3.0
# color = [0.0, 0.0, 1.0, 0.6]
# spin = false

[scene.floor]
# depth = -4.0
# grid_x = 8                    # 1-256
# grid_y = 8                    # 1-256
# tile_size = 4.0
# tile_color = [0.2, 0.2, 0.2, 1.0]
# gap_color = [0.0, 0.0, 0.0, 0.0]

[logging]
# level = "info"                # trace | debug | info | warn | error
"##
    .to_string()
}
