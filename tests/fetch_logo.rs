use std::io::Cursor;

use covergen::fetch;
use image::{Rgb, RgbImage};

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([1, 2, 3]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("encode png");
    bytes
}

#[test]
fn fetch_logos_decodes_served_png() {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("start server");
    let addr = server.server_addr();
    let payload = png_bytes(48, 32);

    std::thread::spawn(move || {
        if let Ok(request) = server.recv() {
            let response = tiny_http::Response::from_data(payload);
            let _ = request.respond(response);
        }
    });

    let url = format!("http://{addr}/logo.png");
    let logos = fetch::fetch_logos(&[url]);
    assert_eq!(logos.len(), 1);
    assert_eq!(logos[0].width(), 48);
    assert_eq!(logos[0].height(), 32);
}

#[test]
fn failed_fetches_are_skipped_not_fatal() {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("start server");
    let addr = server.server_addr();

    std::thread::spawn(move || {
        for _ in 0..2 {
            if let Ok(request) = server.recv() {
                let response =
                    tiny_http::Response::from_string("gone").with_status_code(404);
                let _ = request.respond(response);
            }
        }
    });

    // One 404 and one non-image payload: both skipped, nothing returned.
    let urls = [
        format!("http://{addr}/missing.png"),
        format!("http://{addr}/also-missing.png"),
    ];
    let logos = fetch::fetch_logos(&urls);
    assert!(logos.is_empty());
}

#[test]
fn undecodable_payload_is_skipped() {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("start server");
    let addr = server.server_addr();

    std::thread::spawn(move || {
        if let Ok(request) = server.recv() {
            let response = tiny_http::Response::from_string("<html>not an image</html>");
            let _ = request.respond(response);
        }
    });

    let url = format!("http://{addr}/page.html");
    assert!(fetch::fetch_logos(&[url]).is_empty());
}
