use pixelgrid_engine::api::wasm;
use pixelgrid_engine::{Color, Editor, EMPTY_SNAPSHOT};

fn cells(json: &str) -> Vec<Vec<String>> {
    serde_json::from_str(json).expect("snapshot should be a JSON array of rows")
}

#[test]
fn editor_handle_draws_and_fills() {
    let mut editor = Editor::new();
    assert!(!editor.initialized());
    assert_eq!(editor.size(), 0);

    editor.init_grid(5, "#ffffff").expect("valid init");
    assert_eq!(editor.size(), 5);

    let json = editor.apply_line(0, 0, 4, 4, "black");
    let grid = cells(&json);
    for (i, row) in grid.iter().enumerate() {
        assert_eq!(row[i], "#000000");
    }

    // The diagonal shares no edge between its halves, so the fill stays
    // in the upper-right triangle.
    let json = editor.apply_bucket(4, 0, "#f00");
    let grid = cells(&json);
    assert_eq!(grid[0][4], "#ff0000");
    assert_eq!(grid[4][0], "#ffffff");
    assert_eq!(editor.last_op_stats().cells_written(), 10);

    assert_eq!(editor.get_cell(4, 0).as_deref(), Some("#ff0000"));
    assert_eq!(editor.get_cell(5, 0), None);
}

#[test]
fn tool_failures_return_empty_snapshot() {
    let mut editor = Editor::new();
    assert_eq!(editor.apply_line(0, 0, 1, 1, "#000"), EMPTY_SNAPSHOT);
    assert_eq!(editor.apply_bucket(0, 0, "#000"), EMPTY_SNAPSHOT);
    assert_eq!(editor.apply_gradient(0, 0, 1, 1, "#000", "#fff"), EMPTY_SNAPSHOT);
    assert_eq!(editor.get_grid(), EMPTY_SNAPSHOT);
    assert!(editor.rgba_pixels().is_empty());

    editor.init_grid(2, "white").expect("valid init");
    assert_eq!(editor.apply_line(0, 0, 1, 1, "not-a-color"), EMPTY_SNAPSHOT);
    assert_eq!(editor.apply_gradient(0, 0, 1, 1, "#000", "???"), EMPTY_SNAPSHOT);
    // Failed calls leave the grid alone
    assert!(cells(&editor.get_grid()).iter().flatten().all(|c| c == "#ffffff"));
}

#[test]
fn gradient_region_and_export() {
    let mut editor = Editor::new();
    editor.init_grid(4, "#ffffff").expect("valid init");

    let json = editor.apply_gradient_region(0, 0, 3, 0, "#000000", "#000000", 0, 0, 2, 4);
    let grid = cells(&json);
    for row in grid.iter() {
        assert_eq!(row[0], "#000000");
        assert_eq!(row[1], "#000000");
        assert_eq!(row[2], "#ffffff");
    }

    let bytes = editor.rgba_pixels();
    assert_eq!(bytes.len(), 4 * 4 * 4);
    assert_eq!(&bytes[0..4], &[0, 0, 0, 255]);
    assert_eq!(&bytes[8..12], &[255, 255, 255, 255]);
}

#[test]
fn load_grid_restores_saved_snapshot() {
    let mut first = Editor::new();
    first.init_grid(3, "#123456").expect("valid init");
    first.apply_pixel(1, 1, "#abcdef");
    let saved = first.get_grid();

    let mut second = Editor::new();
    second.load_grid(&saved).expect("saved snapshot loads");
    assert_eq!(second.get_grid(), saved);
    assert_eq!(second.size(), 3);
}

#[test]
fn default_session_functions() {
    // Only test touching the shared session, so no cross-test interference.
    assert!(wasm::init_grid(4, "#ffffff").is_ok());

    let json = wasm::apply_line(0, 3, 3, 3, "#000000");
    assert!(cells(&json)[3].iter().all(|c| c == "#000000"));

    let json = wasm::apply_gradient(0, 0, 3, 0, "#000000", "#ffffff");
    let grid = cells(&json);
    assert_eq!(grid[0][0], "#000000");
    assert_eq!(grid[0][3], "#ffffff");

    let json = wasm::fill_grid("#00ff00");
    assert!(cells(&json).iter().flatten().all(|c| c == "#00ff00"));

    let json = wasm::apply_bucket(0, 0, "#0000ff");
    assert!(cells(&json).iter().flatten().all(|c| c == "#0000ff"));

    let json = wasm::clear_grid();
    assert!(cells(&json).iter().flatten().all(|c| c == "#ffffff"));

    assert_eq!(wasm::apply_pixel(0, 0, "bogus"), EMPTY_SNAPSHOT);
    assert_eq!(wasm::get_grid(), json);
    assert_eq!(wasm::rgba_pixels().len(), 64);

    let saved = wasm::apply_pixel(2, 2, "red");
    assert_eq!(wasm::get_cell(2, 2).as_deref(), Some("#ff0000"));
    assert_eq!(wasm::get_cell(0, 0).as_deref(), Some("#ffffff"));
    assert_eq!(wasm::get_cell(4, 0), None);
    assert_eq!(wasm::get_cell(-1, 2), None);
    assert!(wasm::load_grid(&saved).is_ok());
    assert_eq!(wasm::get_grid(), saved);
}

#[test]
fn palette_is_json_list_of_colors() {
    let colors: Vec<String> = serde_json::from_str(&wasm::palette()).expect("palette JSON");
    assert_eq!(colors.len(), 256);
    assert!(colors.iter().all(|c| c.parse::<Color>().is_ok()));
}
