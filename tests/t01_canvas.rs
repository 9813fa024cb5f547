use tuga::{Canvas, Rgb8, Rgba8};

fn draw_black_frame(canvas: &mut Canvas) {
    let w = canvas.width();
    let h = canvas.height();
    for i in 0..h {
        canvas.set((0, i), Rgb8::black()); // Left Side
        canvas.set((w - 1, i), Rgb8::black()); // Right Side
    }
    for i in 0..w {
        canvas.set((i, 0), Rgb8::black()); // Top Side
        canvas.set((i, h - 1), Rgb8::black()); // Bottom Side
    }
}

#[test]
fn t01_canvas() {
    let mut canvas = Canvas::new(320, 220);
    canvas.fill(Rgba8::white());
    draw_black_frame(&mut canvas);

    let green = Rgba8::new(127, 200, 98, 255);
    for i in 1..canvas.height() / 2 {
        canvas.set((i, i), green);
    }

    assert_eq!(canvas.get((0, 0)), Rgba8::black());
    assert_eq!(canvas.get((319, 219)), Rgba8::black());
    assert_eq!(canvas.get((50, 50)), green);
    assert_eq!(canvas.get((51, 50)), Rgba8::white());
    assert_eq!(canvas.get((160, 110)), Rgba8::white());
}
