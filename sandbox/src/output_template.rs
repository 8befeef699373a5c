use anyhow::{Result, anyhow, bail};
use sdf_marcher::geometry::alias::Float;

/// Expands `{frame}`, `{frame:0N}` (zero padded to N digits), `{time}` and
/// `{time:.N}` (N decimals) in an output file name.
pub(crate) fn expand(template: &str, frame: usize, time: Float) -> Result<String> {
    let mut result = String::with_capacity(template.len() + 8);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        if rest[..open].contains('}') {
            bail!("unmatched '}}' in output template '{template}'");
        }
        result.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        let close = after_open.find('}').ok_or_else(|| anyhow!("unclosed placeholder in output template '{template}'"))?;
        result.push_str(&expand_placeholder(&after_open[..close], frame, time, template)?);
        rest = &after_open[close + 1..];
    }
    if rest.contains('}') {
        bail!("unmatched '}}' in output template '{template}'");
    }
    result.push_str(rest);
    Ok(result)
}

fn expand_placeholder(placeholder: &str, frame: usize, time: Float, template: &str) -> Result<String> {
    let (name, format) = match placeholder.split_once(':') {
        Some((name, format)) => (name, Some(format)),
        None => (placeholder, None),
    };
    match (name, format) {
        ("frame", None) => Ok(frame.to_string()),
        ("frame", Some(format)) => {
            let width = format
                .strip_prefix('0')
                .unwrap_or(format)
                .parse::<usize>()
                .map_err(|_| anyhow!("bad frame format '{format}' in output template '{template}'"))?;
            Ok(format!("{frame:0width$}"))
        }
        ("time", None) => Ok(time.to_string()),
        ("time", Some(format)) => {
            let precision = format
                .strip_prefix('.')
                .and_then(|digits| digits.parse::<usize>().ok())
                .ok_or_else(|| anyhow!("bad time format '{format}' in output template '{template}'"))?;
            Ok(format!("{time:.precision$}"))
        }
        _ => bail!("unknown placeholder '{{{placeholder}}}' in output template '{template}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("{frame:05}.png", 7, 0.0, "00007.png")]
    #[case("shots/{frame}.bmp", 12, 0.0, "shots/12.bmp")]
    #[case("t{time}.tga", 0, 1.5, "t1.5.tga")]
    #[case("t{time:.2}_{frame:03}.jpg", 3, 0.25, "t0.25_003.jpg")]
    #[case("still.png", 4, 2.0, "still.png")]
    fn test_expand(#[case] template: &str, #[case] frame: usize, #[case] time: Float, #[case] expected: &str) {
        assert_eq!(expand(template, frame, time).unwrap(), expected);
    }

    #[rstest]
    #[case("{frame")]
    #[case("frame}.png")]
    #[case("a}{frame}.png")]
    #[case("{index}.png")]
    #[case("{frame:abc}.png")]
    #[case("{time:2}.png")]
    fn test_bad_templates(#[case] template: &str) {
        assert!(expand(template, 0, 0.0).is_err());
    }
}
