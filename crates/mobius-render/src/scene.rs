use std::io::Write;

use mobius_core::Result;
use mobius_geometry::CoordinateGrid;
use mobius_math::{Aabb3, DVec3, Point3};
use tracing::debug;

use crate::mesh::TriangleMesh;

/// A named mesh in the scene
#[derive(Debug, Clone)]
pub struct SceneMesh {
    pub name: String,
    pub mesh: TriangleMesh,
    pub color: [f32; 3],
}

/// Meshes to draw into one viewer page.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub meshes: Vec<SceneMesh>,
}

/// Sky blue, the default strip color.
pub const STRIP_COLOR: [f32; 3] = [0.53, 0.81, 0.92];

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_mesh(&mut self, name: &str, mesh: TriangleMesh, color: [f32; 3]) {
        self.meshes.push(SceneMesh {
            name: name.to_string(),
            mesh,
            color,
        });
    }

    /// Bounding box over every mesh, `None` when nothing has been added.
    pub fn bounds(&self) -> Option<Aabb3> {
        Aabb3::from_points(
            self.meshes
                .iter()
                .flat_map(|m| m.mesh.positions.iter().copied()),
        )
    }

    pub fn total_triangles(&self) -> usize {
        self.meshes.iter().map(|m| m.mesh.triangle_count()).sum()
    }

    /// Write a standalone HTML page that draws the scene with Three.js.
    ///
    /// The page loads Three.js from a CDN; geometry is embedded inline. An
    /// empty scene still yields a page, framed on a unit box.
    pub fn write_html<W: Write>(&self, out: &mut W, title: &str) -> Result<()> {
        let bounds = self
            .bounds()
            .unwrap_or_else(|| Aabb3::new(Point3::ZERO, DVec3::splat(1.0)));
        let center = bounds.center();
        let distance = bounds.diagonal().max(1e-3) * 1.5;
        let title = escape_html(title);

        write!(
            out,
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
        body {{ margin: 0; overflow: hidden; background: #f4f4f4; font-family: sans-serif; }}
        #info {{ position: absolute; top: 10px; left: 10px; padding: 10px;
                 background: rgba(255, 255, 255, 0.85); border-radius: 4px; font-size: 13px; }}
    </style>
</head>
<body>
    <div id="info">
        <b>{title}</b><br>
        Meshes: {meshes}<br>
        Triangles: {triangles}
    </div>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/three.js/r128/three.min.js"></script>
    <script>
        const meshData = [
"#,
            meshes = self.meshes.len(),
            triangles = self.total_triangles(),
        )?;

        for scene_mesh in &self.meshes {
            write_mesh_data(out, scene_mesh)?;
        }

        write!(
            out,
            r#"        ];

        const scene = new THREE.Scene();
        scene.background = new THREE.Color(0xf4f4f4);
        const camera = new THREE.PerspectiveCamera(45, window.innerWidth / window.innerHeight, 0.001, 1000);
        const renderer = new THREE.WebGLRenderer({{ antialias: true }});
        renderer.setSize(window.innerWidth, window.innerHeight);
        document.body.appendChild(renderer.domElement);

        scene.add(new THREE.AmbientLight(0x606060, 1.5));
        const light = new THREE.DirectionalLight(0xffffff, 0.8);
        light.position.set(1, 1, 2);
        scene.add(light);

        meshData.forEach(data => {{
            const geometry = new THREE.BufferGeometry();
            geometry.setAttribute('position', new THREE.Float32BufferAttribute(data.positions, 3));
            geometry.setAttribute('normal', new THREE.Float32BufferAttribute(data.normals, 3));
            geometry.setIndex(data.indices);
            const material = new THREE.MeshPhongMaterial({{
                color: new THREE.Color(data.color[0], data.color[1], data.color[2]),
                side: THREE.DoubleSide,
                transparent: true,
                opacity: 0.8
            }});
            scene.add(new THREE.Mesh(geometry, material));
            scene.add(new THREE.LineSegments(
                new THREE.WireframeGeometry(geometry),
                new THREE.LineBasicMaterial({{ color: 0x808080, transparent: true, opacity: 0.3 }})
            ));
        }});
        scene.add(new THREE.AxesHelper({axes:.4}));

        const center = new THREE.Vector3({cx:.6}, {cy:.6}, {cz:.6});
        let theta = Math.PI / 4, phi = Math.PI / 3, radius = {distance:.6};
        function place() {{
            camera.position.set(
                center.x + radius * Math.sin(phi) * Math.cos(theta),
                center.y + radius * Math.sin(phi) * Math.sin(theta),
                center.z + radius * Math.cos(phi)
            );
            camera.up.set(0, 0, 1);
            camera.lookAt(center);
        }}
        place();

        let dragging = false, last = {{ x: 0, y: 0 }};
        renderer.domElement.addEventListener('mousedown', e => {{ dragging = true; last = {{ x: e.clientX, y: e.clientY }}; }});
        window.addEventListener('mouseup', () => {{ dragging = false; }});
        renderer.domElement.addEventListener('mousemove', e => {{
            if (!dragging) return;
            theta -= (e.clientX - last.x) * 0.01;
            phi = Math.max(0.05, Math.min(Math.PI - 0.05, phi - (e.clientY - last.y) * 0.01));
            last = {{ x: e.clientX, y: e.clientY }};
            place();
        }});
        renderer.domElement.addEventListener('wheel', e => {{
            e.preventDefault();
            radius = Math.max(0.01, radius * (1 + e.deltaY * 0.001));
            place();
        }});
        window.addEventListener('resize', () => {{
            camera.aspect = window.innerWidth / window.innerHeight;
            camera.updateProjectionMatrix();
            renderer.setSize(window.innerWidth, window.innerHeight);
        }});

        (function animate() {{
            requestAnimationFrame(animate);
            renderer.render(scene, camera);
        }})();
    </script>
</body>
</html>
"#,
            axes = bounds.diagonal() * 0.25,
            cx = center.x,
            cy = center.y,
            cz = center.z,
        )?;

        debug!(
            meshes = self.meshes.len(),
            triangles = self.total_triangles(),
            "scene written as html"
        );
        Ok(())
    }
}

/// Draw a coordinate grid as a single mesh into `out`.
pub fn render_grid<W: Write>(coords: &CoordinateGrid, title: &str, out: &mut W) -> Result<()> {
    let mut scene = Scene::new();
    scene.add_mesh(title, TriangleMesh::from_grid(coords), STRIP_COLOR);
    scene.write_html(out, title)
}

fn write_mesh_data<W: Write>(out: &mut W, scene_mesh: &SceneMesh) -> Result<()> {
    let mesh = &scene_mesh.mesh;
    let [r, g, b] = scene_mesh.color;

    writeln!(out, "            {{")?;
    writeln!(out, "                name: \"{}\",", escape_js(&scene_mesh.name))?;
    writeln!(out, "                color: [{r}, {g}, {b}],")?;

    write!(out, "                positions: [")?;
    for (k, p) in mesh.positions.iter().enumerate() {
        if k > 0 {
            write!(out, ",")?;
        }
        write!(out, "{:.5},{:.5},{:.5}", p.x, p.y, p.z)?;
    }
    writeln!(out, "],")?;

    write!(out, "                normals: [")?;
    for (k, n) in mesh.normals.iter().enumerate() {
        if k > 0 {
            write!(out, ",")?;
        }
        write!(out, "{:.4},{:.4},{:.4}", n.x, n.y, n.z)?;
    }
    writeln!(out, "],")?;

    write!(out, "                indices: [")?;
    for (k, idx) in mesh.indices.iter().enumerate() {
        if k > 0 {
            write!(out, ",")?;
        }
        write!(out, "{idx}")?;
    }
    writeln!(out, "]")?;
    writeln!(out, "            }},")?;
    Ok(())
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn escape_js(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('<', "\\u003c")
        .replace('\n', "\\n")
}
