use crate::errors::ImageNameError;

/// Raw, unvalidated pieces of an image name
///
/// Produced by [split]. Only the repository is guaranteed to be present, and
/// none of the pieces have been checked against any naming rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitName {
    pub registry: Option<String>,
    pub namespace: Option<String>,
    pub repository: String,
    pub tag: Option<String>,
}

static SCHEME_SEPARATOR: &str = "://";

/// Split an image name into registry, namespace, repository, and tag
///
/// Slash-separated segments are assigned from the right: the last segment is
/// the repository with an optional `:tag`, and the one before it is the
/// namespace. Anything further left is the registry, which keeps its own
/// slashes. With only two segments, the first is a registry if it contains a
/// dot or a colon or is exactly `localhost`, and a namespace otherwise.
///
/// A scheme like `https://` stays attached to the first segment. The tag
/// separator is the last colon of the last segment, unless that colon is the
/// very first character; then the whole segment is the repository.
///
/// Empty input must be handled by the caller. This fails only when there is
/// no segment at all, as with a string made only of slashes.
pub fn split(s: &str) -> Result<SplitName, ImageNameError> {
    let mut segments = match s.rfind(SCHEME_SEPARATOR) {
        None => path_segments(s),
        Some(pos) => {
            let (scheme, rest) = s.split_at(pos + SCHEME_SEPARATOR.len());
            let mut segments = path_segments(rest);
            if let Some(first) = segments.first_mut() {
                first.insert_str(0, scheme);
            }
            segments
        }
    };
    log::trace!("split {:?}, segments {:?}", s, segments);

    let last = segments
        .pop()
        .ok_or_else(|| ImageNameError::MalformedReference(s.to_owned()))?;

    let (registry, namespace) = match segments.len() {
        0 => (None, None),
        1 => {
            let first = segments.remove(0);
            if looks_like_registry(&first) {
                (Some(first), None)
            } else {
                (None, Some(first))
            }
        }
        _ => {
            let namespace = segments.pop();
            (Some(segments.join("/")), namespace)
        }
    };

    let (repository, tag) = match last.rfind(':') {
        Some(pos) if pos > 0 => (last[..pos].to_owned(), Some(last[pos + 1..].to_owned())),
        _ => (last, None),
    };

    Ok(SplitName {
        registry,
        namespace,
        repository,
        tag,
    })
}

/// Split on `/`, dropping any empty segments at the end
///
/// A string with no slash at all is a single segment, even when empty.
fn path_segments(s: &str) -> Vec<String> {
    if !s.contains('/') {
        return vec![s.to_owned()];
    }
    let mut segments: Vec<String> = s.split('/').map(str::to_owned).collect();
    while segments.last().map_or(false, String::is_empty) {
        segments.pop();
    }
    segments
}

fn looks_like_registry(segment: &str) -> bool {
    segment.contains('.') || segment.contains(':') || segment == "localhost"
}
