use yew::prelude::*;

use crate::hooks::use_rotating_index::{use_rotating_index, RotationConfig};

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub images: Vec<String>,
}

/// Hero image rotation. The slide at the active index carries the `active`
/// class; with a single image nothing ever rotates.
#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let active = use_rotating_index(props.images.len(), RotationConfig::default());

    html! {
        <div id="image-carousel" class="carousel">
            {for props.images.iter().enumerate().map(|(index, src)| {
                let class = if index == active {
                    "carousel-slide active"
                } else {
                    "carousel-slide"
                };
                html! {
                    <img
                        {class}
                        src={src.clone()}
                        alt={format!("Venue photo {}", index + 1)}
                    />
                }
            })}
        </div>
    }
}
