use std::path::Path;

use targa::blend::{adjust, blend, channel, flip};
use targa::image::Image;
use targa::io::tga::{read_image_tga_rgb8, write_image_tga_rgb8};
use targa::io::IoError;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // the whole pipeline aborts on the first missing input
    let first_input = Path::new("input/layer1.tga");
    if !first_input.exists() {
        return Err(IoError::FileDoesNotExist(first_input.to_path_buf()).into());
    }

    std::fs::create_dir_all("output")?;

    let layer1 = read_image_tga_rgb8(first_input)?;
    let pattern1 = read_image_tga_rgb8("input/pattern1.tga")?;

    log::info!("part1: multiply(layer1, pattern1)");
    let mut part1 = Image::from_size_val(layer1.size(), 0)?;
    blend::multiply(&layer1, &pattern1, &mut part1)?;
    write_image_tga_rgb8("output/part1.tga", &part1)?;

    let layer2 = read_image_tga_rgb8("input/layer2.tga")?;
    let mut car = read_image_tga_rgb8("input/car.tga")?;

    log::info!("part2: subtract(layer2, car)");
    let mut part2 = Image::from_size_val(layer2.size(), 0)?;
    blend::subtract(&layer2, &car, &mut part2)?;
    write_image_tga_rgb8("output/part2.tga", &part2)?;

    log::info!("part3: screen(multiply(layer1, pattern2), text)");
    let pattern2 = read_image_tga_rgb8("input/pattern2.tga")?;
    let text = read_image_tga_rgb8("input/text.tga")?;
    let mut multiplied = Image::from_size_val(layer1.size(), 0)?;
    blend::multiply(&layer1, &pattern2, &mut multiplied)?;
    let mut part3 = Image::from_size_val(layer1.size(), 0)?;
    blend::screen(&multiplied, &text, &mut part3)?;
    write_image_tga_rgb8("output/part3.tga", &part3)?;

    log::info!("part4: subtract(multiply(layer2, circles), pattern2)");
    let circles = read_image_tga_rgb8("input/circles.tga")?;
    let mut masked = Image::from_size_val(layer2.size(), 0)?;
    blend::multiply(&layer2, &circles, &mut masked)?;
    let mut part4 = Image::from_size_val(layer2.size(), 0)?;
    blend::subtract(&masked, &pattern2, &mut part4)?;
    write_image_tga_rgb8("output/part4.tga", &part4)?;

    log::info!("part5: overlay(layer1, pattern1)");
    let mut part5 = Image::from_size_val(layer1.size(), 0)?;
    blend::overlay(&layer1, &pattern1, &mut part5)?;
    write_image_tga_rgb8("output/part5.tga", &part5)?;

    // parts 6-8 keep mutating the same car buffer, matching the reference
    // pipeline where each step builds on the previous adjustment
    log::info!("part6: adjust_green(car, 200)");
    adjust::adjust_green(&mut car, 200);
    write_image_tga_rgb8("output/part6.tga", &car)?;

    log::info!("part7: scale_red_blue(car, 4, 0)");
    adjust::scale_red_blue(&mut car, 4, 0);
    write_image_tga_rgb8("output/part7.tga", &car)?;

    log::info!("part8: channel isolation of car");
    let mut gray = Image::from_size_val(car.size(), 0)?;
    for (ch, path) in [
        (0, "output/part8_r.tga"),
        (1, "output/part8_g.tga"),
        (2, "output/part8_b.tga"),
    ] {
        channel::gray_from_channel(&car, ch, &mut gray)?;
        write_image_tga_rgb8(path, &gray)?;
    }

    log::info!("part9: combine_channels(layer_red, layer_green, layer_blue)");
    let red = read_image_tga_rgb8("input/layer_red.tga")?;
    let green = read_image_tga_rgb8("input/layer_green.tga")?;
    let blue = read_image_tga_rgb8("input/layer_blue.tga")?;
    let mut part9 = Image::from_size_val(red.size(), 0)?;
    channel::combine_channels(&red, &green, &blue, &mut part9)?;
    write_image_tga_rgb8("output/part9.tga", &part9)?;

    log::info!("part10: rotate180(text2)");
    let text2 = read_image_tga_rgb8("input/text2.tga")?;
    write_image_tga_rgb8("output/part10.tga", &flip::rotate180(&text2)?)?;

    Ok(())
}
