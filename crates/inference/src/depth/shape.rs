use {crate::InferError, base::Vec2};

fn mismatch(expected: impl Into<String>, got: impl std::fmt::Debug) -> InferError {
    InferError::ShapeMismatch {
        expected: expected.into(),
        got: format!("{:?}", got),
    }
}

// declared dim accepts `actual` when it is dynamic or equal
fn dim_accepts(declared: i64, actual: usize) -> bool {
    declared < 0 || declared as usize == actual
}

/// Width and height of a `[1, H, W]` depth tensor.
pub fn output_size(shape: &[usize]) -> Result<Vec2<usize>, InferError> {
    match *shape {
        [1, h, w] if h > 0 && w > 0 => Ok(Vec2::new(w, h)),
        _ => Err(mismatch("[1, H, W] with H, W > 0", shape)),
    }
}

/// Validate a produced output shape against the engine's declared dims.
pub fn check_output_shape(declared: &[i64], actual: &[usize]) -> Result<Vec2<usize>, InferError> {
    let size = output_size(actual)?;
    if declared.len() != actual.len()
        || !declared.iter().zip(actual).all(|(&d, &a)| dim_accepts(d, a))
    {
        return Err(mismatch(format!("{:?}", declared), actual));
    }
    Ok(size)
}

/// Pick the encoder resolution for a model declaring `[1, H, W, 3]`.
///
/// Fixed declared dims win over `configured`, dynamic ones fall back to it.
pub fn resolve_input_size(
    declared: &[i64],
    configured: Vec2<usize>,
) -> Result<Vec2<usize>, InferError> {
    let [batch, h, w, channels] = *declared else {
        return Err(mismatch("[1, H, W, 3]", declared));
    };
    if !dim_accepts(batch, 1) || !dim_accepts(channels, 3) {
        return Err(mismatch("[1, H, W, 3]", declared));
    }
    let pick = |dim: i64, fallback: usize| if dim > 0 { dim as usize } else { fallback };
    let size = Vec2::new(pick(w, configured.x), pick(h, configured.y));
    if size != configured {
        log::warn!(
            "model declares input {}, overriding configured {}",
            size,
            configured
        );
    }
    Ok(size)
}
