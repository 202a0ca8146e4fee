//! Canonical image request validation.
//!
//! Runs after canonicalization and before the `extra` merge, so the checks
//! apply to the typed fields the caller actually controls. Each check fails
//! independently with the offending field named in the error context.

use crate::types::image::ImageRequest;
use crate::{Error, ErrorContext, Result};

pub(crate) fn validate_image_request(request: &ImageRequest) -> Result<()> {
    if request.model.is_empty() {
        return Err(Error::ModelNotSet);
    }
    if request.width < 1 {
        return Err(Error::validation_with_context(
            "image width must be an integer greater than zero",
            ErrorContext::new()
                .with_field_path("width")
                .with_details(request.width.to_string()),
        ));
    }
    if request.height < 1 {
        return Err(Error::validation_with_context(
            "image height must be an integer greater than zero",
            ErrorContext::new()
                .with_field_path("height")
                .with_details(request.height.to_string()),
        ));
    }
    if request.num_steps < 1 {
        return Err(Error::validation_with_context(
            "number of steps must be an integer greater than zero",
            ErrorContext::new()
                .with_field_path("num_steps")
                .with_details(request.num_steps.to_string()),
        ));
    }
    if !request.scale.is_finite() {
        return Err(Error::validation_with_context(
            "scale must be a finite number",
            ErrorContext::new()
                .with_field_path("scale")
                .with_details(request.scale.to_string()),
        ));
    }
    if request.n_images < 1 {
        return Err(Error::validation_with_context(
            "number of images must be an integer greater than zero",
            ErrorContext::new()
                .with_field_path("nImages")
                .with_details(request.n_images.to_string()),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::image::{ImageInput, ImageParams};

    fn request(params: ImageParams) -> ImageRequest {
        ImageRequest::from_input(ImageInput::Params(params), None).unwrap()
    }

    #[test]
    fn canonical_defaults_pass() {
        assert!(validate_image_request(&request(ImageParams::new("x").model("m"))).is_ok());
    }

    #[test]
    fn zero_width_fails_with_the_width_field() {
        let err = validate_image_request(&request(ImageParams::new("x").model("m").width(0)))
            .unwrap_err();
        assert_eq!(err.context().unwrap().field_path.as_deref(), Some("width"));
    }

    #[test]
    fn zero_height_fails_with_the_height_field() {
        let err = validate_image_request(&request(ImageParams::new("x").model("m").height(0)))
            .unwrap_err();
        assert_eq!(err.context().unwrap().field_path.as_deref(), Some("height"));
    }

    #[test]
    fn zero_steps_fails_with_the_num_steps_field() {
        let err = validate_image_request(&request(ImageParams::new("x").model("m").steps(0)))
            .unwrap_err();
        assert_eq!(
            err.context().unwrap().field_path.as_deref(),
            Some("num_steps")
        );
    }

    #[test]
    fn non_finite_scale_fails() {
        let err = validate_image_request(&request(
            ImageParams::new("x").model("m").scale(f64::NAN),
        ))
        .unwrap_err();
        assert_eq!(err.context().unwrap().field_path.as_deref(), Some("scale"));
    }

    #[test]
    fn zero_batch_size_fails_with_the_n_images_field() {
        let err = validate_image_request(&request(
            ImageParams::new("x").model("m").batch_size(0),
        ))
        .unwrap_err();
        assert_eq!(
            err.context().unwrap().field_path.as_deref(),
            Some("nImages")
        );
    }
}
