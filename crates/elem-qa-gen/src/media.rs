//! Media classification and the raw-media capability filter
//!
//! An element enters the generated suite only if its class string names a
//! raw-media kind and its pad templates show raw media flowing both in and
//! out. Classification happens once per element, up front, so the rest of
//! the crate never re-inspects the free-text class string.

use serde::{Deserialize, Serialize};

use crate::registry::{ElementDescriptor, PadDirection, PadTemplateDescriptor};

/// Structure-name fragment marking a raw audio pad.
pub const RAW_AUDIO_CAPS: &str = "audio/x-raw";

/// Structure-name fragment marking a raw video pad.
pub const RAW_VIDEO_CAPS: &str = "video/x-raw";

/// Concrete raw-media lane a generated pipeline runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMedia {
    /// Audio lane: `audiotestsrc` through `audioconvert`
    Audio,
    /// Video lane: `videotestsrc` through `videoconvert`
    Video,
}

impl SourceMedia {
    /// Synthetic test source element for this lane.
    #[must_use]
    pub const fn test_source(&self) -> &'static str {
        match self {
            Self::Audio => "audiotestsrc",
            Self::Video => "videotestsrc",
        }
    }

    /// Format converter element for this lane.
    #[must_use]
    pub const fn converter(&self) -> &'static str {
        match self {
            Self::Audio => "audioconvert",
            Self::Video => "videoconvert",
        }
    }

    /// Sink placeholder resolved by the harness at launch time.
    #[must_use]
    pub const fn sink_placeholder(&self) -> &'static str {
        match self {
            Self::Audio => "%(audiosink)s",
            Self::Video => "%(videosink)s",
        }
    }
}

/// Media classification derived once from an element's class string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Class names Audio only
    Audio,
    /// Class names Video only
    Video,
    /// Class names both Audio and Video
    Both,
    /// Class names neither; includes the empty class string
    Neither,
}

impl MediaKind {
    /// Classify a free-text class string by substring.
    #[must_use]
    pub fn from_class(media_class: &str) -> Self {
        match (media_class.contains("Audio"), media_class.contains("Video")) {
            (true, true) => Self::Both,
            (true, false) => Self::Audio,
            (false, true) => Self::Video,
            (false, false) => Self::Neither,
        }
    }

    /// Lane driven through the synthetic source.
    ///
    /// Precedence rule: an element classified as both audio and video is
    /// driven as audio.
    #[must_use]
    pub const fn source_media(&self) -> Option<SourceMedia> {
        match self {
            Self::Audio | Self::Both => Some(SourceMedia::Audio),
            Self::Video => Some(SourceMedia::Video),
            Self::Neither => None,
        }
    }
}

/// Raw-media directionality gathered from an element's pad templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCapsProfile {
    /// Has a raw-audio source pad
    pub audio_src: bool,
    /// Has a raw-audio sink pad
    pub audio_sink: bool,
    /// Has a raw-video source pad
    pub video_src: bool,
    /// Has a raw-video sink pad
    pub video_sink: bool,
}

impl RawCapsProfile {
    /// Walk all pad templates and flag each raw-capable direction.
    #[must_use]
    pub fn from_pad_templates(templates: &[PadTemplateDescriptor]) -> Self {
        let mut profile = Self::default();
        for template in templates {
            for structure in &template.caps {
                if structure.contains(RAW_AUDIO_CAPS) {
                    match template.direction {
                        PadDirection::Src => profile.audio_src = true,
                        PadDirection::Sink => profile.audio_sink = true,
                    }
                } else if structure.contains(RAW_VIDEO_CAPS) {
                    match template.direction {
                        PadDirection::Src => profile.video_src = true,
                        PadDirection::Sink => profile.video_sink = true,
                    }
                }
            }
        }
        profile
    }

    /// At least one raw sink pad and one raw source pad, of either kind.
    /// The kinds need not match; a raw-audio-in, raw-video-out element
    /// still qualifies.
    #[must_use]
    pub const fn transforms_raw_media(&self) -> bool {
        (self.audio_sink || self.video_sink) && (self.audio_src || self.video_src)
    }
}

/// Eligibility test: classified as audio or video, and raw media flows
/// both in and out of the element. Ineligible elements are skipped
/// silently, never reported as errors.
#[must_use]
pub fn is_eligible(element: &ElementDescriptor) -> bool {
    if MediaKind::from_class(&element.media_class) == MediaKind::Neither {
        return false;
    }
    RawCapsProfile::from_pad_templates(&element.pad_templates).transforms_raw_media()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PropertyDescriptor;

    fn raw_pad(direction: PadDirection, caps: &str) -> PadTemplateDescriptor {
        PadTemplateDescriptor::new(direction, vec![caps.to_string()])
    }

    #[test]
    fn test_media_kind_from_class() {
        assert_eq!(MediaKind::from_class("Filter/Effect/Audio"), MediaKind::Audio);
        assert_eq!(MediaKind::from_class("Filter/Effect/Video"), MediaKind::Video);
        assert_eq!(MediaKind::from_class("Filter/Audio/Video"), MediaKind::Both);
        assert_eq!(MediaKind::from_class("Codec/Demuxer"), MediaKind::Neither);
    }

    #[test]
    fn test_media_kind_empty_class_is_neither() {
        assert_eq!(MediaKind::from_class(""), MediaKind::Neither);
    }

    #[test]
    fn test_media_kind_is_case_sensitive() {
        // Class strings use the framework's capitalized vocabulary
        assert_eq!(MediaKind::from_class("filter/effect/audio"), MediaKind::Neither);
    }

    #[test]
    fn test_source_media_audio_precedence() {
        assert_eq!(MediaKind::Audio.source_media(), Some(SourceMedia::Audio));
        assert_eq!(MediaKind::Both.source_media(), Some(SourceMedia::Audio));
        assert_eq!(MediaKind::Video.source_media(), Some(SourceMedia::Video));
        assert_eq!(MediaKind::Neither.source_media(), None);
    }

    #[test]
    fn test_source_media_element_names() {
        assert_eq!(SourceMedia::Audio.test_source(), "audiotestsrc");
        assert_eq!(SourceMedia::Video.test_source(), "videotestsrc");
        assert_eq!(SourceMedia::Audio.converter(), "audioconvert");
        assert_eq!(SourceMedia::Video.converter(), "videoconvert");
        assert_eq!(SourceMedia::Audio.sink_placeholder(), "%(audiosink)s");
        assert_eq!(SourceMedia::Video.sink_placeholder(), "%(videosink)s");
    }

    #[test]
    fn test_profile_flags_each_direction() {
        let templates = vec![
            raw_pad(PadDirection::Sink, "audio/x-raw"),
            raw_pad(PadDirection::Src, "video/x-raw"),
        ];
        let profile = RawCapsProfile::from_pad_templates(&templates);
        assert!(profile.audio_sink);
        assert!(profile.video_src);
        assert!(!profile.audio_src);
        assert!(!profile.video_sink);
    }

    #[test]
    fn test_profile_matches_structure_names_by_substring() {
        let templates = vec![raw_pad(
            PadDirection::Sink,
            "audio/x-raw, format=(string)S16LE",
        )];
        let profile = RawCapsProfile::from_pad_templates(&templates);
        assert!(profile.audio_sink);
    }

    #[test]
    fn test_profile_ignores_non_raw_caps() {
        let templates = vec![
            raw_pad(PadDirection::Sink, "video/x-h264"),
            raw_pad(PadDirection::Src, "application/x-rtp"),
        ];
        let profile = RawCapsProfile::from_pad_templates(&templates);
        assert_eq!(profile, RawCapsProfile::default());
        assert!(!profile.transforms_raw_media());
    }

    #[test]
    fn test_profile_ignores_empty_caps_templates() {
        let templates = vec![PadTemplateDescriptor::new(PadDirection::Sink, Vec::new())];
        let profile = RawCapsProfile::from_pad_templates(&templates);
        assert_eq!(profile, RawCapsProfile::default());
    }

    #[test]
    fn test_transforms_raw_media_requires_both_directions() {
        let sink_only = RawCapsProfile {
            audio_sink: true,
            ..Default::default()
        };
        assert!(!sink_only.transforms_raw_media());

        let src_only = RawCapsProfile {
            video_src: true,
            ..Default::default()
        };
        assert!(!src_only.transforms_raw_media());

        let cross_media = RawCapsProfile {
            audio_sink: true,
            video_src: true,
            ..Default::default()
        };
        assert!(cross_media.transforms_raw_media());
    }

    #[test]
    fn test_eligible_audio_filter() {
        let element = ElementDescriptor::new("volume", "Filter/Effect/Audio")
            .with_pad_template(raw_pad(PadDirection::Sink, "audio/x-raw"))
            .with_pad_template(raw_pad(PadDirection::Src, "audio/x-raw"));
        assert!(is_eligible(&element));
    }

    #[test]
    fn test_ineligible_without_media_class() {
        let element = ElementDescriptor::new("tsdemux", "Codec/Demuxer")
            .with_pad_template(raw_pad(PadDirection::Sink, "audio/x-raw"))
            .with_pad_template(raw_pad(PadDirection::Src, "audio/x-raw"));
        assert!(!is_eligible(&element));
    }

    #[test]
    fn test_ineligible_empty_class_even_with_raw_pads() {
        let element = ElementDescriptor::new("mystery", "")
            .with_pad_template(raw_pad(PadDirection::Sink, "audio/x-raw"))
            .with_pad_template(raw_pad(PadDirection::Src, "audio/x-raw"));
        assert!(!is_eligible(&element));
    }

    #[test]
    fn test_ineligible_sink_only_element() {
        let element = ElementDescriptor::new("fakevideosink", "Sink/Video")
            .with_pad_template(raw_pad(PadDirection::Sink, "video/x-raw"))
            .with_property(PropertyDescriptor::boolean("sync"));
        assert!(!is_eligible(&element));
    }

    #[test]
    fn test_ineligible_source_only_element() {
        let element = ElementDescriptor::new("videotestsrc", "Source/Video")
            .with_pad_template(raw_pad(PadDirection::Src, "video/x-raw"));
        assert!(!is_eligible(&element));
    }

    #[test]
    fn test_eligible_cross_media_transform() {
        // Raw audio in, raw video out still passes the symmetric requirement
        let element = ElementDescriptor::new("wavescope", "Visualization/Audio/Video")
            .with_pad_template(raw_pad(PadDirection::Sink, "audio/x-raw"))
            .with_pad_template(raw_pad(PadDirection::Src, "video/x-raw"));
        assert!(is_eligible(&element));
    }

    #[test]
    fn test_media_kind_serde() {
        let json = serde_json::to_string(&MediaKind::Both).expect("serialize");
        assert_eq!(json, "\"both\"");
    }
}
