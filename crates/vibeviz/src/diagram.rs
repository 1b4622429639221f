//! The Vibe Database Manager architecture overview diagram.
//!
//! Everything here is literal content: the layer boxes, their interior
//! columns, the flow arrows, the legend, and the technology panel are all
//! placed at hand-picked canvas coordinates. There is no input and no
//! computed layout; rendering the diagram twice produces identical bytes.

use crate::{
    canvas::{Canvas, Figure},
    color::Color,
    draw::{Arrow, RoundedBox, Stroke, Text, TextAnchor, marker_definitions},
    geometry::Size,
};

/// Canvas size in units (16 x 12, one unit per page inch).
const CANVAS_WIDTH: f32 = 16.0;
const CANVAS_HEIGHT: f32 = 12.0;

/// Translucency applied to the layer box fills.
const LAYER_FILL_ALPHA: f32 = 0.7;

/// Entries printed in the console summary after a successful export.
pub const SUMMARY_CONTENTS: [&str; 7] = [
    "Frontend Layer (Bootstrap 5 UI)",
    "Backend Services (Flask)",
    "AI Integration (Natural Language Processing)",
    "Database Connectivity (Multi-DB Support)",
    "Data Storage Layer (PostgreSQL)",
    "External Systems",
    "Data flow arrows and technical details",
];

/// The diagram's color scheme, one color per architectural concern.
#[derive(Debug, Clone)]
pub struct Palette {
    pub frontend: Color,
    pub backend: Color,
    pub database: Color,
    pub ai: Color,
    pub external: Color,
    pub connection: Color,
    pub panel: Color,
    pub light_text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        let named = |s: &str| Color::new(s).expect("palette colors are valid CSS");
        Self {
            frontend: named("#3498db"),
            backend: named("#e74c3c"),
            database: named("#2ecc71"),
            ai: named("#9b59b6"),
            external: named("#f39c12"),
            connection: named("#34495e"),
            panel: named("lightgray"),
            light_text: named("white"),
        }
    }
}

/// Renders the fixed architecture overview.
///
/// The single operation is [`render`](Self::render): it takes no input and
/// returns the finished [`Figure`]. Nothing is written until an exporter
/// is applied to the result.
#[derive(Debug, Clone, Default)]
pub struct ArchitectureDiagram {
    palette: Palette,
}

impl ArchitectureDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws every element in paint order and seals the canvas.
    pub fn render(&self) -> Figure {
        let mut canvas = Canvas::new(Size::new(CANVAS_WIDTH, CANVAS_HEIGHT));

        self.draw_title(&mut canvas);
        self.draw_frontend_layer(&mut canvas);
        self.draw_backend_layer(&mut canvas);
        self.draw_ai_layer(&mut canvas);
        self.draw_connectivity_layer(&mut canvas);
        self.draw_storage_layer(&mut canvas);
        self.draw_external_systems(&mut canvas);
        self.draw_flow_arrows(&mut canvas);
        self.draw_legend(&mut canvas);
        self.draw_technology_panel(&mut canvas);

        canvas.into_figure(marker_definitions([&self.palette.connection]))
    }

    /// Places a translucent layer box given its lower-left corner and size
    /// in units.
    fn place_layer_box(&self, canvas: &mut Canvas, x: f32, y: f32, w: f32, h: f32, fill: Color) {
        let layer = RoundedBox::new(canvas.size(w, h))
            .with_fill(fill)
            .with_corner_radius(canvas.px(0.1));
        canvas.place(&layer, canvas.box_center(x, y, w, h));
    }

    fn draw_title(&self, canvas: &mut Canvas) {
        canvas.place(
            &Text::new("Vibe Database Administration Assistant", canvas.font_px(20.0)).bold(),
            canvas.point(8.0, 11.5),
        );
        canvas.place(
            &Text::new("System Architecture Overview", canvas.font_px(14.0)).italic(),
            canvas.point(8.0, 11.0),
        );
    }

    fn draw_frontend_layer(&self, canvas: &mut Canvas) {
        let light = self.palette.light_text;
        self.place_layer_box(
            canvas,
            1.0,
            9.0,
            14.0,
            1.5,
            self.palette.frontend.with_alpha(LAYER_FILL_ALPHA),
        );
        canvas.place(
            &Text::new("Frontend Layer", canvas.font_px(14.0))
                .bold()
                .with_color(light),
            canvas.point(8.0, 9.75),
        );

        let columns = [
            (3.0, TextAnchor::Start, "• Bootstrap 5 UI\n• ChatGPT-style Interface"),
            (8.0, TextAnchor::Middle, "• JavaScript Client\n• Real-time Chat"),
            (13.0, TextAnchor::End, "• File Downloads\n• Table Views"),
        ];
        for (x, anchor, content) in columns {
            canvas.place(
                &Text::new(content, canvas.font_px(10.0))
                    .with_anchor(anchor)
                    .with_color(light),
                canvas.point(x, 9.4),
            );
        }
    }

    fn draw_backend_layer(&self, canvas: &mut Canvas) {
        let light = self.palette.light_text;
        self.place_layer_box(
            canvas,
            1.0,
            6.5,
            14.0,
            2.0,
            self.palette.backend.with_alpha(LAYER_FILL_ALPHA),
        );
        canvas.place(
            &Text::new("Backend Services Layer (Flask)", canvas.font_px(14.0))
                .bold()
                .with_color(light),
            canvas.point(8.0, 7.8),
        );

        let columns = [
            (
                2.5,
                "Route Handlers",
                "• Main Routes\n• Auth Routes\n• Database Routes\n• AI Routes",
            ),
            (
                6.0,
                "Service Layer",
                "• Database Manager\n• AI Services\n• Health Monitor\n• PostgreSQL Manager",
            ),
            (
                10.0,
                "Models & ORM",
                "• User Model\n• Conversation Model\n• Connection Model\n• Health Check Model",
            ),
            (
                13.5,
                "Authentication",
                "• Flask-Login\n• Session Management\n• User Roles",
            ),
        ];
        for (x, heading, items) in columns {
            canvas.place(
                &Text::new(heading, canvas.font_px(11.0)).bold().with_color(light),
                canvas.point(x, 7.6),
            );
            canvas.place(
                &Text::new(items, canvas.font_px(8.0)).with_color(light),
                canvas.point(x, 7.0),
            );
        }
    }

    fn draw_ai_layer(&self, canvas: &mut Canvas) {
        let light = self.palette.light_text;
        self.place_layer_box(
            canvas,
            1.0,
            4.5,
            6.5,
            1.5,
            self.palette.ai.with_alpha(LAYER_FILL_ALPHA),
        );
        canvas.place(
            &Text::new("AI Integration Layer", canvas.font_px(12.0))
                .bold()
                .with_color(light),
            canvas.point(4.25, 5.9),
        );
        canvas.place(
            &Text::new("Natural Language Processing", canvas.font_px(10.0))
                .bold()
                .with_color(light),
            canvas.point(4.25, 5.5),
        );
        canvas.place(
            &Text::new(
                "• Database Query Analysis\n• Action Detection\n• Intelligent Suggestions\n• Conversation Processing",
                canvas.font_px(8.0),
            )
            .with_color(light),
            canvas.point(4.25, 4.85),
        );
    }

    fn draw_connectivity_layer(&self, canvas: &mut Canvas) {
        let light = self.palette.light_text;
        self.place_layer_box(
            canvas,
            8.5,
            4.5,
            6.5,
            1.5,
            self.palette.external.with_alpha(LAYER_FILL_ALPHA),
        );
        canvas.place(
            &Text::new("Database Connectivity Layer", canvas.font_px(12.0))
                .bold()
                .with_color(light),
            canvas.point(11.75, 5.9),
        );

        let columns = [
            (10.0, "Multi-DB Support", "• SQLite\n• PostgreSQL\n• MS SQL (pymssql)"),
            (13.5, "Operations", "• Health Checks\n• Space Analysis\n• Schema Analysis"),
        ];
        for (x, heading, items) in columns {
            canvas.place(
                &Text::new(heading, canvas.font_px(10.0)).bold().with_color(light),
                canvas.point(x, 5.5),
            );
            canvas.place(
                &Text::new(items, canvas.font_px(8.0)).with_color(light),
                canvas.point(x, 4.85),
            );
        }
    }

    fn draw_storage_layer(&self, canvas: &mut Canvas) {
        let light = self.palette.light_text;
        self.place_layer_box(
            canvas,
            1.0,
            2.0,
            14.0,
            1.5,
            self.palette.database.with_alpha(LAYER_FILL_ALPHA),
        );
        canvas.place(
            &Text::new("Data Storage Layer", canvas.font_px(14.0))
                .bold()
                .with_color(light),
            canvas.point(8.0, 3.4),
        );

        let columns = [
            (
                3.0,
                "Application Database",
                "PostgreSQL\n• Users & Sessions\n• Conversations\n• Connection Configs",
            ),
            (
                8.0,
                "Target Databases",
                "Multi-Database Support\n• Production Systems\n• Development Environments",
            ),
            (
                13.0,
                "File Storage",
                "Local Storage\n• Reports (.txt)\n• Logs\n• Uploads",
            ),
        ];
        for (x, heading, items) in columns {
            canvas.place(
                &Text::new(heading, canvas.font_px(11.0)).bold().with_color(light),
                canvas.point(x, 3.1),
            );
            canvas.place(
                &Text::new(items, canvas.font_px(8.0)).with_color(light),
                canvas.point(x, 2.5),
            );
        }
    }

    fn draw_external_systems(&self, canvas: &mut Canvas) {
        self.place_layer_box(
            canvas,
            1.0,
            0.2,
            9.0,
            1.0,
            self.palette.external.with_alpha(0.5),
        );
        canvas.place(
            &Text::new("External Systems", canvas.font_px(12.0)).bold(),
            canvas.point(5.5, 0.8),
        );

        let entries = [
            (3.0, "Cloud Services"),
            (5.5, "Database Servers"),
            (8.0, "File System"),
        ];
        for (x, label) in entries {
            canvas.place(
                &Text::new(label, canvas.font_px(10.0)),
                canvas.point(x, 0.5),
            );
        }
    }

    fn draw_flow_arrows(&self, canvas: &mut Canvas) {
        let arrow = Arrow::new(Stroke::new(self.palette.connection, 2.0));

        // Frontend -> backend -> AI/connectivity -> storage -> external.
        let flows = [
            ((8.0, 9.0), (8.0, 8.5)),
            ((6.0, 6.5), (4.25, 6.0)),
            ((10.0, 6.5), (11.75, 6.0)),
            ((8.0, 4.5), (8.0, 3.5)),
            ((8.0, 2.0), (8.0, 1.2)),
        ];
        for ((sx, sy), (ex, ey)) in flows {
            let path = arrow.render_to_svg(canvas.point(sx, sy), canvas.point(ex, ey));
            canvas.place_node(path.into());
        }

        let annotations = [
            (8.5, 8.75, "HTTP Requests"),
            (4.5, 6.25, "AI Processing"),
            (11.0, 6.25, "DB Operations"),
            (8.5, 3.75, "Data Queries"),
            (8.5, 1.6, "External Calls"),
        ];
        for (x, y, label) in annotations {
            canvas.place(
                &Text::new(label, canvas.font_px(8.0))
                    .italic()
                    .with_anchor(TextAnchor::Start),
                canvas.point(x, y),
            );
        }
    }

    fn draw_legend(&self, canvas: &mut Canvas) {
        let (legend_x, legend_y) = (10.5, 0.2);

        canvas.place(
            &Text::new("Legend:", canvas.font_px(10.0))
                .bold()
                .with_anchor(TextAnchor::Start),
            canvas.point(legend_x, legend_y + 0.8),
        );

        let entries = [
            (self.palette.frontend, "Frontend Layer"),
            (self.palette.backend, "Backend Services"),
            (self.palette.ai, "AI Integration"),
            (self.palette.external, "External/Connectivity"),
            (self.palette.database, "Data Storage"),
        ];
        for (i, (color, label)) in entries.into_iter().enumerate() {
            let y_pos = legend_y + 0.6 - (i as f32) * 0.12;

            let swatch = RoundedBox::new(canvas.size(0.2, 0.08))
                .with_fill(color.with_alpha(LAYER_FILL_ALPHA));
            canvas.place(&swatch, canvas.box_center(legend_x, y_pos, 0.2, 0.08));

            canvas.place(
                &Text::new(label, canvas.font_px(8.0)).with_anchor(TextAnchor::Start),
                canvas.point(legend_x + 0.25, y_pos + 0.04),
            );
        }
    }

    fn draw_technology_panel(&self, canvas: &mut Canvas) {
        let panel = RoundedBox::new(canvas.size(2.5, 1.5))
            .with_fill(self.palette.panel.with_alpha(0.8))
            .with_corner_radius(canvas.px(0.05));
        canvas.place(&panel, canvas.box_center(12.5, 0.3, 2.5, 1.5));

        canvas.place(
            &Text::new("Key Technologies", canvas.font_px(9.0)).bold(),
            canvas.point(13.75, 1.65),
        );

        let details = [
            "• Flask Framework",
            "• SQLAlchemy ORM",
            "• Bootstrap 5 UI",
            "• Natural Language AI",
            "• Multi-DB Support",
            "• PostgreSQL",
            "• pymssql Connector",
        ];
        for (i, detail) in details.into_iter().enumerate() {
            canvas.place(
                &Text::new(detail, canvas.font_px(7.0)).with_anchor(TextAnchor::Start),
                canvas.point(12.6, 1.45 - (i as f32) * 0.15),
            );
        }
    }
}
