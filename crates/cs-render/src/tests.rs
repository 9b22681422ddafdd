//! Unit tests for cs-render.

use cs_actor::ActorKind;
use cs_core::{Cell, RoutingMode, SimConfig};
use cs_grid::{Grid, GridBuilder};
use cs_sim::SimState;

use crate::{FrameBuffer, RenderError, Renderer, palette};

fn renderer(draw_destinations: bool) -> Renderer {
    Renderer { tile_size: 20, draw_destinations }
}

/// Colour at the centre of `cell`'s tile.
fn centre(frame: &FrameBuffer, cell: Cell) -> u32 {
    frame.pixel(cell.x as usize * 20 + 10, cell.y as usize * 20 + 10).unwrap()
}

/// Colour at the top-left pixel of `cell`'s tile.
fn corner(frame: &FrameBuffer, cell: Cell) -> u32 {
    frame.pixel(cell.x as usize * 20, cell.y as usize * 20).unwrap()
}

fn state_with_car(dest: Option<Cell>) -> SimState {
    let grid = GridBuilder::new(4, 3)
        .road_line(Cell::new(0, 1), Cell::new(3, 1))
        .build()
        .unwrap();
    let mut state = SimState::new(grid);
    let id = state.actors.spawn(ActorKind::Car, Cell::new(1, 1));
    state.actors.destination[id.index()] = dest;
    state
}

#[cfg(test)]
mod frame {
    use super::*;

    #[test]
    fn new_frame_is_black() {
        let f = FrameBuffer::new(3, 2);
        assert_eq!(f.pixels(), &[0; 6]);
        assert_eq!(f.pixel(3, 0), None);
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut f = FrameBuffer::new(4, 4);
        f.fill_rect(2, 2, 10, 10, 7);
        assert_eq!(f.pixels().iter().filter(|&&p| p == 7).count(), 4);
        assert_eq!(f.pixel(3, 3), Some(7));
        assert_eq!(f.pixel(1, 3), Some(0));
    }

    #[test]
    fn fill_rect_fully_outside_is_noop() {
        let mut f = FrameBuffer::new(4, 4);
        f.fill_rect(4, 0, 2, 2, 7);
        f.fill_rect(0, 0, 0, 3, 7);
        f.fill_rect(usize::MAX, usize::MAX, 5, 5, 7);
        assert!(f.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn clear_paints_everything() {
        let mut f = FrameBuffer::new(2, 2);
        f.clear(palette::WHITE);
        assert!(f.pixels().iter().all(|&p| p == palette::WHITE));
    }
}

#[cfg(test)]
mod draw {
    use super::*;

    #[test]
    fn tiles_are_coloured_by_type() {
        let state = state_with_car(None);
        let r = renderer(true);
        let mut frame = r.frame_for(&state.grid).unwrap();
        assert_eq!((frame.width(), frame.height()), (80, 60));

        r.draw(&state, &mut frame).unwrap();
        assert_eq!(centre(&frame, Cell::new(0, 0)), palette::GREEN);
        assert_eq!(centre(&frame, Cell::new(3, 1)), palette::RED);
        assert_eq!(centre(&frame, Cell::new(3, 2)), palette::GREEN);
    }

    #[test]
    fn car_is_a_black_inset_on_its_tile() {
        let state = state_with_car(None);
        let r = renderer(true);
        let mut frame = r.frame_for(&state.grid).unwrap();
        r.draw(&state, &mut frame).unwrap();

        let car = Cell::new(1, 1);
        assert_eq!(centre(&frame, car), palette::CAR_BODY);
        assert_eq!(corner(&frame, car), palette::CAR_TILE);
        // Inset spans [5, 15) inside the 20 px tile.
        assert_eq!(frame.pixel(20 + 5, 20 + 5), Some(palette::CAR_BODY));
        assert_eq!(frame.pixel(20 + 4, 20 + 5), Some(palette::CAR_TILE));
        assert_eq!(frame.pixel(20 + 14, 20 + 14), Some(palette::CAR_BODY));
        assert_eq!(frame.pixel(20 + 15, 20 + 14), Some(palette::CAR_TILE));
    }

    #[test]
    fn destination_marker_only_when_enabled() {
        let dest = Cell::new(3, 2);
        let state = state_with_car(Some(dest));

        let mut frame = renderer(true).frame_for(&state.grid).unwrap();
        renderer(true).draw(&state, &mut frame).unwrap();
        assert_eq!(centre(&frame, dest), palette::DESTINATION);
        assert_eq!(corner(&frame, dest), palette::GREEN);

        renderer(false).draw(&state, &mut frame).unwrap();
        assert_eq!(centre(&frame, dest), palette::GREEN);
    }

    #[test]
    fn redraw_repaints_the_whole_surface() {
        let state = SimState::new(Grid::new(2, 2));
        let r = renderer(false);
        let mut frame = r.frame_for(&state.grid).unwrap();
        frame.clear(0x123456);
        r.draw(&state, &mut frame).unwrap();
        assert!(frame.pixels().iter().all(|&p| p == palette::GREEN));
    }

    #[test]
    fn wrong_frame_size_is_rejected() {
        let state = SimState::new(Grid::new(2, 2));
        let mut frame = FrameBuffer::new(10, 10);
        let err = renderer(false).draw(&state, &mut frame).unwrap_err();
        assert_eq!(
            err,
            RenderError::FrameMismatch { width: 40, height: 40, got_width: 10, got_height: 10 }
        );
    }

    #[test]
    fn renderer_follows_config() {
        let small = Renderer::from_config(&SimConfig::small());
        assert!(small.draw_destinations);
        let large = Renderer::from_config(&SimConfig::large());
        assert!(!large.draw_destinations);
        let custom = SimConfig { tile_size: 8, routing: RoutingMode::DirectedSearch, ..SimConfig::large() };
        assert_eq!(Renderer::from_config(&custom).tile_size, 8);
    }

    #[test]
    fn oversized_surface_is_reported() {
        let r = Renderer { tile_size: u32::MAX, draw_destinations: false };
        let err = r.frame_for(&Grid::new(2, 1)).unwrap_err();
        assert!(matches!(err, RenderError::SurfaceTooLarge { tile_size: u32::MAX, .. }));
    }
}
