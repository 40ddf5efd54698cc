//! Literal seed-file contents written by the scaffold generator

/// `@use` block for partials two levels below `sass/` (object and project
/// partials, and `_foundation.scss` itself)
pub const USE_FOUNDATION_TWO_LEVELS: &str = r#"@use "../../foundation/variable" as v;
@use "../../foundation/mixin" as m;"#;

/// `@use` block for partials one level below `sass/` (layout partials)
pub const USE_FOUNDATION_ONE_LEVEL: &str = r#"@use "../foundation/variable" as v;
@use "../foundation/mixin" as m;"#;

/// Color variable table seeded into `foundation/_variable.scss`
pub const VARIABLE_SCSS: &str = r"$bg-blue: #9ED0E0;
$bg-light-blue: #E9F6F8;
$bg-dark-blue: #67B0C7;
$font-sub_gray: #CCE1E4;
$font-accent_red: #CE2073;
$font-accent_yellow: #FFEE56;";

/// Seed for `foundation/_base.scss`
pub const BASE_SCSS: &str = r"@use './variable' as v;
@use '../foundation/mixin' as m;";

/// Breakpoint map and media-query mixin seeded into `foundation/_mixin.scss`
pub const MIXIN_SCSS: &str = r"$breakpoint: (
  sp: 'screen and (max-width:767px)',
  tab: 'screen and (max-width:900px)',
  pc: 'screen and (min-width:901px)'
);

@mixin mq($bp) {
  @media #{map-get($breakpoint, $bp)} {
    @content;
  }
}";

/// Import-aggregation file for the current profile
pub const STYLE_SCSS: &str = r#"/*--------------------------------------*
  * foundation
*--------------------------------------*/
@use "./foundation/reset";
@use "./foundation/variable";
@use "./foundation/base";

/*--------------------------------------*
    * layout
*--------------------------------------*/
@use "./layout/header";
@use "./layout/footer";

/*--------------------------------------*
    * component
*--------------------------------------*/

// @use "./object/component/button";
@use "./object/component/inner";
@use "./object/component/section";
@use "./object/component/swiper";
// @use "./object/component/point";
// @use "./object/component/tel";

/*--------------------------------------*
    * project
*--------------------------------------*/
@use "./object/project/mv";
@use "./object/project/about";
@use "./object/project/work";
@use "./object/project/policy";
@use "./object/project/skill";
@use "./object/project/contact";
@use "./object/project/page-work";
@use "./object/project/price";
@use "./object/project/voice";"#;

/// Import-aggregation file for the legacy profile (earlier revision: fewer
/// project partials, no price/policy/skill/page-work/voice)
pub const STYLE_SCSS_LEGACY: &str = r#"/*--------------------------------------*
  * foundation
*--------------------------------------*/
@use "./foundation/reset";
@use "./foundation/variable";
@use "./foundation/base";

/*--------------------------------------*
    * layout
*--------------------------------------*/
@use "./layout/header";
@use "./layout/footer";

/*--------------------------------------*
    * component
*--------------------------------------*/
@use "./object/component/inner";
@use "./object/component/section";
@use "./object/component/swiper";

/*--------------------------------------*
    * project
*--------------------------------------*/
@use "./object/project/mv";
@use "./object/project/about";
@use "./object/project/work";
@use "./object/project/contact";"#;

/// Seed for the project root `.gitignore` (current profile only)
pub const GITIGNORE: &str = "node_modules";
