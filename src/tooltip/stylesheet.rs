//! Companion CSS for the tooltip class contract
//! The overlay is hidden until its `.tiptrigger` is hovered or holds focus.
//! Arrows are drawn in `currentColor`; `render` sets the arrow's colour to the box background.

const STYLESHEET: &str = r#".tiptrigger {
  position: relative;
  display: inline-block;
  cursor: default;
}
.tiptrigger .tooltip {
  position: absolute;
  z-index: 1070;
  display: block;
  visibility: hidden;
  opacity: 0;
  transition: opacity 0.15s linear, visibility 0.15s linear;
  pointer-events: none;
}
.tiptrigger:hover .tooltip,
.tiptrigger:focus-within .tooltip {
  visibility: visible;
  opacity: 1;
}
.tooltip .arrow {
  position: absolute;
  width: 0;
  height: 0;
  border: 0.4rem solid transparent;
}
.tooltip-inner {
  padding: 0.25rem 0.5rem;
  border-radius: 0.25rem;
  text-align: center;
  font-size: 0.875rem;
  line-height: 1.4;
}
.bs-tooltip-bottom {
  top: 100%;
  left: 50%;
  transform: translateX(-50%);
  padding-top: 0.4rem;
}
.bs-tooltip-bottom .arrow {
  top: -0.4rem;
  left: calc(50% - 0.4rem);
  border-bottom-color: currentColor;
}
.bs-tooltip-top {
  bottom: 100%;
  left: 50%;
  transform: translateX(-50%);
  padding-bottom: 0.4rem;
}
.bs-tooltip-top .arrow {
  bottom: -0.4rem;
  left: calc(50% - 0.4rem);
  border-top-color: currentColor;
}
.bs-tooltip-left {
  right: 100%;
  top: 50%;
  transform: translateY(-50%);
  padding-right: 0.4rem;
}
.bs-tooltip-left .arrow {
  right: -0.4rem;
  top: calc(50% - 0.4rem);
  border-left-color: currentColor;
}
.bs-tooltip-right {
  left: 100%;
  top: 50%;
  transform: translateY(-50%);
  padding-left: 0.4rem;
}
.bs-tooltip-right .arrow {
  left: -0.4rem;
  top: calc(50% - 0.4rem);
  border-right-color: currentColor;
}
"#;

pub fn stylesheet() -> &'static str {
    STYLESHEET
}
