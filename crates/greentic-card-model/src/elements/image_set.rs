use serde_json::Value;

use crate::element::{ElementKind, ElementProps};
use crate::elements::Image;
use crate::enums::ImageSize;
use crate::parser::read_typed_items;
use crate::property_bag::{PropertyBag, ToCardJson};
use crate::reader::{NodeResult, ObjectReader};
use crate::version::SchemaVersion;

/// Gallery of images rendered at one size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageSet {
    pub props: ElementProps,
    pub images: Vec<Image>,
    pub image_size: ImageSize,
}

impl ImageSet {
    pub(crate) fn read(reader: &mut ObjectReader<'_, '_>) -> NodeResult<Self> {
        Ok(Self {
            props: ElementProps::read(reader),
            images: read_typed_items(
                reader,
                "images",
                Some(ElementKind::Image.type_name()),
                Image::read,
            ),
            image_size: reader.enumeration("imageSize", SchemaVersion::V1_0),
        })
    }
}

impl ToCardJson for ImageSet {
    fn to_json(&self) -> Value {
        let mut bag = PropertyBag::typed(ElementKind::ImageSet.type_name());
        self.props.write(&mut bag);
        bag.array("images", self.images.iter().map(ToCardJson::to_json).collect());
        bag.enumeration("imageSize", self.image_size);
        bag.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_images_and_size() {
        let set = ImageSet {
            images: vec![Image::new("http://")],
            image_size: ImageSize::Medium,
            ..ImageSet::default()
        };
        assert_eq!(
            set.serialize(),
            "{\"imageSize\":\"Medium\",\"images\":[{\"type\":\"Image\",\"url\":\"http://\"}],\
             \"type\":\"ImageSet\"}\n"
        );
    }
}
