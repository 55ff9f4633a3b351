// Author: Dustin Pilgrim
// License: MIT

use quadcrop_core::{Overlay, Point2, Region};
use quadcrop_ipc::{Event, Response};

fn pt(p: Point2) -> String {
    format!("({:.1}, {:.1})", p.x, p.y)
}

fn poly(points: &[Point2]) -> String {
    points.iter().map(|p| pt(*p)).collect::<Vec<_>>().join(" ")
}

fn region_line(id: usize, region: &Region) -> String {
    format!("region {id}: {} area {:.1}", poly(region.points()), region.area())
}

pub fn print_events(events: &[Event]) {
    for ev in events {
        match ev {
            Event::DrawHandlerAdded => println!("event: draw handler added"),
            Event::DrawHandlerRemoved => println!("event: draw handler removed"),
            Event::Redraw => println!("event: redraw"),
            Event::Committed { regions } => {
                println!("event: committed {} regions", regions.len());
                for (id, r) in regions.iter().enumerate() {
                    println!("  {}", region_line(id, r));
                }
            }
            Event::Report { level, message } => eprintln!("{level:?}: {message}"),
        }
    }
}

pub fn print_response(resp: Response) {
    match resp {
        Response::Ok => println!("ok"),

        Response::Modal { status } => println!("status: {status:?}"),

        Response::Status {
            active,
            dragging,
            snapped,
        } => {
            println!("active: {active}");
            println!("dragging: {dragging}");
            println!("snapped: {snapped}");
        }

        Response::Overlay { overlay: None } => println!("(no overlay)"),
        Response::Overlay {
            overlay: Some(overlay),
        } => print_overlay(&overlay),

        Response::Error { message } => eprintln!("error: {message}"),
    }
}

fn print_overlay(o: &Overlay) {
    println!("outline: {}", poly(o.outline.corners()));
    println!("accent_colour: 0x{:08X}", o.accent_colour);
    println!("shade_colour: 0x{:08X}", o.shade_colour);

    for m in &o.markers {
        let tag = if m.snapped { " (snapped)" } else { "" };
        println!("marker: {}{tag}", pt(m.pos));
    }

    if let Some(rect) = &o.drag_rect {
        println!("drag: {}", poly(rect));
    }

    for (id, r) in o.shaded.iter().enumerate() {
        println!("shaded {}", region_line(id, r));
    }
}
